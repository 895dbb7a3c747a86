//! Parser error types
//!
//! The grammar is lenient by contract: segments, pieces, and exercise
//! candidates that fail their local checks are dropped from the output, not
//! reported. The only failures a caller can observe are an input that is
//! empty after trimming and the defensive catch-all for faults that should
//! never occur in practice.

use thiserror::Error;

/// Failure reported by [`parse_workout`](crate::parse_workout)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty, or whitespace only
    #[error("Input cannot be empty")]
    EmptyInput,

    /// An unexpected fault occurred while parsing
    ///
    /// Carries the fault's own message when one is available, otherwise
    /// `"Unknown parsing error"`.
    #[error("{0}")]
    Unknown(String),
}

impl ParseError {
    /// Fallback message for faults without a usable payload
    pub(crate) const UNKNOWN_MESSAGE: &'static str = "Unknown parsing error";
}
