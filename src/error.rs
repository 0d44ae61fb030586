//! Field parse errors
//!
//! These never escape the renderer: every failure degrades the affected
//! property to its default and is logged.

use thiserror::Error;

/// Error when an optional message field cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldParseError {
    #[error("Invalid color literal: \"{0}\"")]
    InvalidColor(String),

    #[error("Expected {expected} comma-separated values, got {actual}")]
    WrongArity { expected: usize, actual: usize },

    #[error("Invalid number: \"{0}\"")]
    InvalidNumber(String),

    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: i32 },
}
