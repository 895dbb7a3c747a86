//! Workout line parser driver
//!
//! Splits the token stream into comma/semicolon segments and hands each
//! segment to the grammar layer. Segment order is preserved in the output;
//! segments that yield nothing are skipped, so a line of pure garbage still
//! parses successfully to an empty workout.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::ast::Workout;
use super::errors::ParseError;
use super::grammar;
use super::lexer::{Lexer, Token};

/// Parse a free-text workout line into a structured [`Workout`]
///
/// The parser is pure and stateless: identical input always produces a
/// structurally identical result, and concurrent calls need no
/// coordination.
///
/// Failure is reported only for input that is empty after trimming;
/// everything else degrades to fewer emitted exercises. A panic inside the
/// pipeline - which would indicate a parser bug, not bad input - is caught
/// and surfaced as [`ParseError::Unknown`] instead of crossing the library
/// boundary.
///
/// ```
/// use repline::parse_workout;
///
/// let workout = parse_workout("Squats 3x10, Deadlift 1x5").unwrap();
/// assert_eq!(workout.len(), 2);
///
/// assert!(parse_workout("   ").is_err());
/// assert!(parse_workout("5x5").unwrap().is_empty());
/// ```
pub fn parse_workout(input: &str) -> Result<Workout, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    panic::catch_unwind(AssertUnwindSafe(|| parse_line(input))).map_err(|payload| {
        let message = panic_message(payload);
        tracing::error!(message = %message, "unexpected fault while parsing");
        ParseError::Unknown(message)
    })
}

fn parse_line(input: &str) -> Workout {
    let tokens: Vec<_> = Lexer::new(input).collect();

    let mut sets = Vec::new();
    for segment in segments(&tokens) {
        if let Some(set) = grammar::parse_segment(input, segment) {
            sets.push(set);
        }
    }

    tracing::trace!(segments = sets.len(), "parsed workout line");
    Workout { sets }
}

/// Split the token stream on segment separators, dropping blank segments
fn segments<'t, 'a>(tokens: &'t [Token<'a>]) -> impl Iterator<Item = &'t [Token<'a>]> {
    tokens
        .split(|t| t.kind.is_segment_separator())
        .filter(|segment| segment.iter().any(|t| !t.kind.is_trivia()))
}

/// Best-effort extraction of a panic payload's message
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        ParseError::UNKNOWN_MESSAGE.to_string()
    }
}
