//! Error types for the bill splitter.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur outside the pure apportionment
//! engine: configuration loading, rate validation, and event store edits.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{EventId, ItemId, PersonId};

/// The main error type for the bill splitter.
///
/// The apportionment functions in [`crate::calculation`] never fail; every
/// other fallible operation in the crate returns this error type.
///
/// # Example
///
/// ```
/// use bill_splitter::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/splitter.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/splitter.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax or tip rate was negative or outside the configured bounds.
    #[error("Invalid {name} rate {value}: {message}")]
    InvalidRate {
        /// Which rate was rejected ("tax" or "tip").
        name: String,
        /// The rejected value.
        value: Decimal,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// No event exists with the given id.
    #[error("Event not found: {id}")]
    EventNotFound {
        /// The id that was not found.
        id: EventId,
    },

    /// No person exists with the given id in the event.
    #[error("Person '{id}' not found in event '{event_id}'")]
    PersonNotFound {
        /// The event that was searched.
        event_id: EventId,
        /// The id that was not found.
        id: PersonId,
    },

    /// No item exists with the given id in the event.
    #[error("Item '{id}' not found in event '{event_id}'")]
    ItemNotFound {
        /// The event that was searched.
        event_id: EventId,
        /// The id that was not found.
        id: ItemId,
    },

    /// An event record was invalid.
    #[error("Invalid event field '{field}': {message}")]
    InvalidEvent {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A person record was invalid.
    #[error("Invalid person field '{field}': {message}")]
    InvalidPerson {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Another person in the same event already uses this name.
    #[error("A person named '{name}' already exists in this event")]
    DuplicatePerson {
        /// The conflicting name.
        name: String,
    },

    /// An item record was invalid.
    #[error("Invalid item field '{field}': {message}")]
    InvalidItem {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
