//! Token kinds for the workout line lexer
//!
//! Tokens cover the input completely: every byte of the source belongs to
//! exactly one token, and unknown characters become `ERROR` tokens that are
//! carried as opaque text rather than dropped. Exercise names are recovered
//! by slicing the original source between token offsets, so no text is lost
//! at this stage.

/// All token kinds produced by the lexer
///
/// Only a handful of kinds carry grammatical meaning (separators, grouping
/// markers, the sets×reps anchor); everything else is opaque name text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,

    // =========================================================================
    // SEGMENT SEPARATORS
    // =========================================================================
    COMMA,     // ,
    SEMICOLON, // ;

    // =========================================================================
    // GROUPING MARKERS
    // =========================================================================
    SS_KW, // "ss" (superset connector, case-insensitive)
    PLUS,  // + (circuit connector)

    // =========================================================================
    // VALUES
    // =========================================================================
    SETS_REPS, // 5x5, 12x3
    INTEGER,   // 42

    // =========================================================================
    // NAME TEXT
    // =========================================================================
    WORD, // Bench, Press, kg (when not part of a weight)

    // =========================================================================
    // PUNCTUATION WITHOUT GRAMMATICAL MEANING
    // =========================================================================
    AT,      // @
    MINUS,   // -
    SLASH,   // /
    DOT,     // .
    COLON,   // :
    L_PAREN, // (
    R_PAREN, // )

    // =========================================================================
    // FALLBACK
    // =========================================================================
    ERROR,
}

impl TokenKind {
    /// Whitespace between meaningful tokens
    pub fn is_trivia(self) -> bool {
        self == Self::WHITESPACE
    }

    /// Top-level segment separators (`,` and `;`)
    pub fn is_segment_separator(self) -> bool {
        matches!(self, Self::COMMA | Self::SEMICOLON)
    }

    /// Tokens that end or start with a word character
    ///
    /// An `ss` token glued to one of these on either side is part of a
    /// larger word (`Press`, `3x10ss`), not a superset marker.
    pub fn is_word_like(self) -> bool {
        matches!(self, Self::WORD | Self::INTEGER | Self::SETS_REPS)
    }
}
