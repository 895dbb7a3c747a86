//! End-to-end behavior of `parse_workout`: failure contract, segmentation,
//! silent-drop policy, determinism.

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use repline::{ParseError, SetKind, parse_workout};

use crate::helpers::{only_exercise, parse_ok};

#[rstest]
#[case("")]
#[case("   ")]
#[case(" \t \n ")]
fn test_empty_input_is_an_error(#[case] input: &str) {
    let err = parse_workout(input).unwrap_err();
    assert_eq!(err, ParseError::EmptyInput);
    assert_eq!(err.to_string(), "Input cannot be empty");
}

#[test]
fn test_single_exercise() {
    let workout = parse_ok("Bench Press 5x5");
    assert_eq!(workout.sets[0].kind, SetKind::Normal);

    let bench = only_exercise(&workout);
    assert_eq!(bench.name, "Bench Press");
    assert_eq!((bench.sets, bench.reps), (5, 5));
    assert_eq!(bench.weight, None);
    assert_eq!(bench.rpe, None);
}

#[test]
fn test_fully_annotated_exercise() {
    let workout = parse_ok("Bench Press 5x5 185lbs @RPE8");
    let bench = only_exercise(&workout);
    assert_eq!(bench.name, "Bench Press");
    assert_eq!((bench.sets, bench.reps), (5, 5));
    assert_eq!(bench.weight.as_deref(), Some("185 lbs"));
    assert_eq!(bench.rpe, Some(8.0));
}

#[test]
fn test_annotations_in_either_order() {
    let squats = parse_ok("Squats 3x10 @RPE7 80kg");
    let exercise = only_exercise(&squats);
    assert_eq!(exercise.weight.as_deref(), Some("80 kg"));
    assert_eq!(exercise.rpe, Some(7.0));
}

#[test]
fn test_comma_segments_stay_in_order() {
    let workout = parse_ok("Bench Press 5x5, Squats 3x10, Deadlift 1x5");
    assert_eq!(workout.len(), 3);
    for set in &workout {
        assert_eq!(set.kind, SetKind::Normal);
        assert_eq!(set.exercises.len(), 1);
    }
    let names: Vec<_> = workout
        .iter()
        .map(|set| set.exercises[0].name.as_str())
        .collect();
    assert_eq!(names, vec!["Bench Press", "Squats", "Deadlift"]);
}

#[test]
fn test_semicolon_is_a_segment_separator_too() {
    let workout = parse_ok("Bench Press 5x5; Squats 3x10");
    assert_eq!(workout.len(), 2);
}

#[rstest]
#[case("5x5")]
#[case("Bench Press 5x")]
#[case("Bench Press")]
#[case("!!!")]
fn test_unusable_input_yields_empty_success(#[case] input: &str) {
    // Silent drop, not an error: callers distinguish "nothing recognized"
    // from a failed parse
    let workout = parse_ok(input);
    assert!(workout.is_empty());
}

#[test]
fn test_malformed_segment_does_not_poison_the_rest() {
    let workout = parse_ok("mystery, Squats 3x10, 5x5");
    assert_eq!(workout.len(), 1);
    assert_eq!(only_exercise(&workout).name, "Squats");
}

#[test]
fn test_parse_is_deterministic() {
    let input = "Bench Press 5x5 185lbs @RPE8, Squats 3x10 ss Lunges 3x12";
    assert_eq!(parse_workout(input), parse_workout(input));
}

#[test]
fn test_whitespace_robustness() {
    let padded = parse_ok("  Bench Press   5x5   185lbs   @RPE8  ");
    let packed = parse_ok("Bench Press 5x5 185lbs @RPE8");
    assert_eq!(padded, packed);
}

#[test]
fn test_full_line_end_to_end() {
    let workout = parse_ok("Bench Press 5x5 185lbs @RPE8, Squats 3x10 ss Lunges 3x12");
    assert_eq!(workout.len(), 2);
    assert_eq!(workout.sets[0].kind, SetKind::Normal);
    assert_eq!(workout.sets[1].kind, SetKind::Superset);
    assert_eq!(workout.exercise_count(), 3);
}
