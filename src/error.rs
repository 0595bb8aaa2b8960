//! Error types for the Vacation Ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the configuration, allowance and event ledger layers. The accounting
//! engine itself is infallible.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Vacation Ledger.
///
/// # Example
///
/// ```
/// use vacation_ledger::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/holidays.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A holiday rule describes a date that cannot exist.
    #[error("Invalid holiday rule '{name}': {message}")]
    InvalidHolidayRule {
        /// The name of the offending holiday.
        name: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A vacation allowance was outside the accepted range.
    #[error("Invalid vacation allowance {days}: {message}")]
    InvalidAllowance {
        /// The rejected number of days.
        days: Decimal,
        /// A description of why the allowance was rejected.
        message: String,
    },

    /// A calendar year outside the supported range was requested.
    #[error("Unsupported calendar year: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// An event covers dates outside the accepted range.
    #[error("Invalid event '{id}': {message}")]
    InvalidEvent {
        /// The id of the offending event.
        id: String,
        /// A description of what made the event invalid.
        message: String,
    },

    /// No event with the given id exists in the ledger.
    #[error("Event not found: {id}")]
    EventNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An event with the same id is already present in the ledger.
    #[error("Duplicate event id: {id}")]
    DuplicateEvent {
        /// The conflicting id.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
