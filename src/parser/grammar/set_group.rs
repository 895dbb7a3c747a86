//! Segment classification and piece splitting
//!
//! A segment is one comma/semicolon-delimited chunk of the input line. Its
//! grouping kind is decided before any exercise is extracted: a standalone
//! `ss` makes it a superset, else a `+` makes it a circuit, else it is a
//! normal set. The superset marker wins when both appear; `+` can occur
//! inside weight or style notation, while a standalone `ss` only ever means
//! a superset.

use crate::parser::ast::{SetKind, WorkoutSet};
use crate::parser::lexer::Token;
use crate::parser::token_kind::TokenKind;

use super::exercise::parse_exercise;

/// Classify one segment and extract its exercises
///
/// Returns `None` when no piece of the segment yields a valid exercise;
/// such segments vanish from the output entirely.
pub fn parse_segment(source: &str, segment: &[Token<'_>]) -> Option<WorkoutSet> {
    let kind = classify(segment);

    let mut exercises = Vec::new();
    for piece in split_pieces(segment, kind) {
        if let Some(exercise) = parse_exercise(source, piece) {
            exercises.push(exercise);
        }
    }

    if exercises.is_empty() {
        tracing::debug!(
            segment = segment_text(source, segment),
            "segment yielded no exercises, dropping"
        );
        return None;
    }

    Some(WorkoutSet { kind, exercises })
}

/// Decide the grouping kind for a segment
///
/// The checks are independent and ordered: superset beats circuit when a
/// segment contains both markers.
fn classify(segment: &[Token<'_>]) -> SetKind {
    if (0..segment.len()).any(|i| is_superset_marker(segment, i)) {
        SetKind::Superset
    } else if segment.iter().any(|t| t.kind == TokenKind::PLUS) {
        SetKind::Circuit
    } else {
        SetKind::Normal
    }
}

/// A standalone whole-word `ss`: not glued to word characters on either side
///
/// `3x10ss` and `ss5` are word tails/heads, not markers; `ss` next to
/// whitespace, punctuation, or a segment edge is a marker.
fn is_superset_marker(segment: &[Token<'_>], idx: usize) -> bool {
    if segment[idx].kind != TokenKind::SS_KW {
        return false;
    }
    let glued_left = idx > 0 && segment[idx - 1].kind.is_word_like();
    let glued_right = idx + 1 < segment.len() && segment[idx + 1].kind.is_word_like();
    !glued_left && !glued_right
}

/// Split a segment into exercise candidate pieces at its connector tokens
fn split_pieces<'t, 'a>(segment: &'t [Token<'a>], kind: SetKind) -> Vec<&'t [Token<'a>]> {
    match kind {
        SetKind::Normal => vec![segment],
        SetKind::Superset => split_where(segment, |i| is_superset_marker(segment, i)),
        SetKind::Circuit => split_where(segment, |i| segment[i].kind == TokenKind::PLUS),
    }
}

fn split_where<'t, 'a>(
    segment: &'t [Token<'a>],
    mut is_marker: impl FnMut(usize) -> bool,
) -> Vec<&'t [Token<'a>]> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for idx in 0..segment.len() {
        if is_marker(idx) {
            pieces.push(&segment[start..idx]);
            start = idx + 1;
        }
    }
    pieces.push(&segment[start..]);
    pieces
}

/// Trimmed source text of a segment, for log output
fn segment_text<'a>(source: &'a str, segment: &[Token<'_>]) -> &'a str {
    let content: Vec<_> = segment.iter().filter(|t| !t.kind.is_trivia()).collect();
    match (content.first(), content.last()) {
        (Some(first), Some(last)) => {
            &source[usize::from(first.offset)..usize::from(last.end())]
        }
        _ => "",
    }
}
