//! Single-exercise extraction
//!
//! The sets×reps token anchors the match: the name is the raw source text
//! before the first anchor, trimmed. Weight and RPE are independent scans
//! over the whole piece text - either, both, or neither may be present, in
//! any order relative to the anchor, and they may reuse characters the
//! anchor search already saw (`2x200lbs` yields reps 200 *and* weight
//! `200 lbs`).

use smol_str::SmolStr;

use crate::parser::ast::Exercise;
use crate::parser::lexer::Token;
use crate::parser::token_kind::TokenKind;

/// Recognized weight unit spellings, longest first so `pounds` wins over
/// `pound` and `lbs` over `lb`. Matching is case-insensitive; the matched
/// casing is preserved in the output.
const WEIGHT_UNITS: [&str; 5] = ["pounds", "pound", "lbs", "lb", "kg"];

/// Extract a single exercise from one piece of a segment
///
/// Returns `None` when the piece has no sets×reps anchor, no name before
/// the anchor, or a zero/overflowing digit group. Dropped pieces never
/// abort the surrounding segment.
pub fn parse_exercise(source: &str, piece: &[Token<'_>]) -> Option<Exercise> {
    let piece = trim_trivia(piece);
    let (first, last) = (piece.first()?, piece.last()?);
    let text = &source[usize::from(first.offset)..usize::from(last.end())];

    let Some(anchor) = piece.iter().find(|t| t.kind == TokenKind::SETS_REPS) else {
        tracing::trace!(piece = text, "no sets×reps token, dropping piece");
        return None;
    };

    let (sets, reps) = split_sets_reps(anchor.text)?;

    let name = source[usize::from(first.offset)..usize::from(anchor.offset)].trim();
    if name.is_empty() {
        tracing::trace!(piece = text, "sets×reps without a name, dropping piece");
        return None;
    }

    Some(Exercise {
        name: SmolStr::new(name),
        sets,
        reps,
        weight: find_weight(text),
        rpe: find_rpe(text),
    })
}

/// Strip leading/trailing whitespace tokens from a piece
fn trim_trivia<'t, 'a>(piece: &'t [Token<'a>]) -> &'t [Token<'a>] {
    let start = piece
        .iter()
        .position(|t| !t.kind.is_trivia())
        .unwrap_or(piece.len());
    let end = piece
        .iter()
        .rposition(|t| !t.kind.is_trivia())
        .map_or(start, |i| i + 1);
    &piece[start..end]
}

/// Split a `<sets>x<reps>` token into its two counts
///
/// Zero counts violate the output invariant and overflowing digit groups
/// have no usable value; both drop the candidate.
fn split_sets_reps(text: &str) -> Option<(u32, u32)> {
    let (sets, reps) = text.split_once('x')?;
    let sets = sets.parse::<u32>().ok()?;
    let reps = reps.parse::<u32>().ok()?;
    if sets == 0 || reps == 0 {
        tracing::trace!(token = text, "zero sets or reps, dropping piece");
        return None;
    }
    Some((sets, reps))
}

/// Scan a piece for the first weight annotation
///
/// A weight is a number (original decimal formatting preserved) followed by
/// an optional whitespace run and a unit. The scan advances byte by byte,
/// so a later start inside a digit run is still found.
fn find_weight(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        if let Some(weight) = match_weight_at(text, start) {
            return Some(weight);
        }
    }
    None
}

/// Try to match a weight whose number starts at `start`
fn match_weight_at(text: &str, start: usize) -> Option<String> {
    let bytes = text.as_bytes();

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    // optional fraction, consumed only when digits follow the dot
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            end = frac;
        }
    }
    let number = &text[start..end];

    let mut unit_start = end;
    while unit_start < bytes.len() && bytes[unit_start].is_ascii_whitespace() {
        unit_start += 1;
    }
    // Byte-wise comparison: a matched unit is pure ASCII, so slicing the
    // original casing back out afterwards stays on char boundaries.
    let rest = &text[unit_start..];
    let unit = WEIGHT_UNITS
        .iter()
        .find(|unit| {
            rest.len() >= unit.len()
                && rest.as_bytes()[..unit.len()].eq_ignore_ascii_case(unit.as_bytes())
        })
        .map(|unit| &rest[..unit.len()])?;

    Some(format!("{number} {unit}"))
}

/// Scan a piece for the first `@RPE<number>` annotation
///
/// The keyword is case-insensitive; the number follows it immediately and
/// may carry a decimal fraction.
fn find_rpe(text: &str) -> Option<f32> {
    for (at, _) in text.match_indices('@') {
        let rest = &text[at + 1..];
        if rest.len() < 3 || !rest.as_bytes()[..3].eq_ignore_ascii_case(b"rpe") {
            continue;
        }
        if let Some(value) = leading_number(&rest[3..]) {
            return value.parse().ok();
        }
    }
    None
}

/// The leading `<digits>` or `<digits>.<digits>` of a string, if any
fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            end = frac;
        }
    }
    Some(&text[..end])
}
