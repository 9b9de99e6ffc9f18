//! Bill splitter
//!
//! This crate apportions a shared bill among the people who ran it up:
//! each item's price is divided equally among the people sharing it, and tax
//! and tip are applied per person exactly as they are to the whole bill.
//! Around that pure computation it provides an event store, configuration,
//! and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
