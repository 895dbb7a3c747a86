//! # repline
//!
//! Core library for parsing free-text workout lines into structured
//! exercise records.
//!
//! A line like `"Bench Press 5x5 185lbs @RPE8, Squats 3x10 ss Lunges 3x12"`
//! becomes an ordered list of workout sets, each holding one or more
//! exercises with sets/reps counts, an optional weight, an optional RPE,
//! and a grouping kind that distinguishes straight sets from supersets
//! (`ss`) and circuits (`+`).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ast       → Output data model (Workout, WorkoutSet, Exercise, SetKind)
//!   ↓
//! grammar   → Segment classification, exercise extraction
//!   ↓
//! parser    → Logos lexer, segmentation, parse_workout entry point
//! ```
//!
//! ## Example
//!
//! ```
//! use repline::{SetKind, parse_workout};
//!
//! let workout = parse_workout("Bench Press 5x5 185lbs @RPE8").unwrap();
//! assert_eq!(workout.len(), 1);
//! assert_eq!(workout.sets[0].kind, SetKind::Normal);
//!
//! let bench = &workout.sets[0].exercises[0];
//! assert_eq!(bench.name, "Bench Press");
//! assert_eq!((bench.sets, bench.reps), (5, 5));
//! assert_eq!(bench.weight.as_deref(), Some("185 lbs"));
//! assert_eq!(bench.rpe, Some(8.0));
//! ```
//!
//! Malformed pieces of the input degrade to fewer emitted exercises, never
//! to an error; the only reported failure for well-behaved callers is an
//! input that is empty after trimming.

/// Parser: Logos lexer, segment grammar, output data model
pub mod parser;

// Re-export the public surface at the crate root
pub use parser::{
    Exercise, Lexer, ParseError, SetKind, Token, TokenKind, Workout, WorkoutSet, parse_workout,
    tokenize,
};
