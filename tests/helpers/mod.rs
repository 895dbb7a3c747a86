//! Shared helpers for the integration suite

use repline::{Exercise, Workout, parse_workout};

/// Parse input that is expected to succeed
pub fn parse_ok(input: &str) -> Workout {
    parse_workout(input).unwrap_or_else(|e| panic!("parse of {input:?} failed: {e}"))
}

/// The single exercise of a workout expected to hold exactly one set
pub fn only_exercise(workout: &Workout) -> &Exercise {
    assert_eq!(workout.len(), 1, "expected exactly one workout set");
    assert_eq!(
        workout.sets[0].exercises.len(),
        1,
        "expected exactly one exercise"
    );
    &workout.sets[0].exercises[0]
}
