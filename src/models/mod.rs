//! Core data models for the bill splitter.
//!
//! This module contains all the domain models used throughout the crate.

mod color;
mod event;
mod ids;
mod item;
mod person;
mod split_result;

pub use color::{Color, ColorAssigner, PaletteColorAssigner};
pub use event::Event;
pub use ids::{EventId, IdGenerator, ItemId, PersonId, SequentialIdGenerator, UuidGenerator};
pub use item::Item;
pub use person::Person;
pub use split_result::{BillSplit, BillSummary, ItemShare, PersonBreakdown, SplitWarning};
