//! Grouping classification: normal sets, supersets, circuits, and the
//! priority and word-boundary rules around their markers.

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use repline::SetKind;

use crate::helpers::parse_ok;

fn names(input: &str) -> (SetKind, Vec<String>) {
    let workout = parse_ok(input);
    assert_eq!(workout.len(), 1, "expected one workout set for {input:?}");
    let set = &workout.sets[0];
    (
        set.kind,
        set.exercises.iter().map(|e| e.name.to_string()).collect(),
    )
}

#[test]
fn test_superset_keeps_exercise_order() {
    let (kind, names) = names("Bench Press 5x5 ss Push-ups 3x10");
    assert_eq!(kind, SetKind::Superset);
    assert_eq!(names, vec!["Bench Press", "Push-ups"]);
}

#[test]
fn test_circuit_keeps_exercise_order() {
    let (kind, names) = names("Push-ups 3x10 + Squats 3x15 + Burpees 3x8");
    assert_eq!(kind, SetKind::Circuit);
    assert_eq!(names, vec!["Push-ups", "Squats", "Burpees"]);
}

#[rstest]
#[case("Bench 5x5 ss Dips 3x8")]
#[case("Bench 5x5 SS Dips 3x8")]
#[case("Bench 5x5 Ss Dips 3x8")]
fn test_superset_marker_is_case_insensitive(#[case] input: &str) {
    assert_eq!(parse_ok(input).sets[0].kind, SetKind::Superset);
}

#[test]
fn test_superset_wins_over_circuit() {
    // Both markers present: the segment is a superset and splits only on
    // `ss`, so the `+` stays inside the second piece's trailing text
    let (kind, names) = names("Bench 5x5 ss Dips 3x8 + Squats 5x5");
    assert_eq!(kind, SetKind::Superset);
    assert_eq!(names, vec!["Bench", "Dips"]);
}

#[rstest]
#[case("Press 5x5")]
#[case("Squats 3x10ss Lunges 3x12")]
#[case("ss5 Lunges 3x12")]
fn test_ss_glued_to_a_word_is_not_a_marker(#[case] input: &str) {
    assert_eq!(parse_ok(input).sets[0].kind, SetKind::Normal);
}

#[test]
fn test_superset_with_one_failed_piece_keeps_its_kind() {
    let (kind, names) = names("Bench 5x5 ss warmup stuff");
    assert_eq!(kind, SetKind::Superset);
    assert_eq!(names, vec!["Bench"]);
}

#[test]
fn test_circuit_with_failed_pieces() {
    let (kind, names) = names("Push-ups 3x10 + rest + Squats 3x15");
    assert_eq!(kind, SetKind::Circuit);
    assert_eq!(names, vec!["Push-ups", "Squats"]);
}

#[test]
fn test_mixed_groupings_across_segments() {
    let workout = parse_ok("A 1x1 ss B 2x2, C 3x3 + D 4x4, E 5x5");
    let kinds: Vec<_> = workout.iter().map(|set| set.kind).collect();
    assert_eq!(
        kinds,
        vec![SetKind::Superset, SetKind::Circuit, SetKind::Normal]
    );
    assert_eq!(workout.exercise_count(), 5);
}

#[test]
fn test_multiple_superset_markers_chain_exercises() {
    let (kind, names) = names("A 1x1 ss B 2x2 ss C 3x3");
    assert_eq!(kind, SetKind::Superset);
    assert_eq!(names, vec!["A", "B", "C"]);
}
