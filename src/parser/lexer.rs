//! Logos-based lexer for workout lines
//!
//! Fast tokenization using the logos crate. The lexer recognizes only the
//! structural tokens of the grammar (separators, grouping markers, the
//! sets×reps anchor); weight and RPE annotations are scanned independently
//! per piece by the grammar layer, because they may overlap the tokens the
//! anchor search sees (`2x200lbs` reuses the reps digits as the weight
//! number).

use super::token_kind::TokenKind;
use logos::Logos;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Byte offset one past the end of this token
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire line into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"")] // Don't skip anything, we want all tokens
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // =========================================================================
    // VALUES (longest match wins over the bare literals below)
    // =========================================================================
    // The sets×reps anchor: digits, a lowercase `x`, digits. Maximal munch
    // keeps `12x3x4` anchored at `12x3`, matching a left-to-right scan.
    #[regex(r"[0-9]+x[0-9]+")]
    SetsReps,

    #[regex(r"[0-9]+")]
    Integer,

    // Words are letters/underscores only; digits stay separate tokens so a
    // glued anchor (`Bench5x5`, `x5x5`) is still visible. The `ss` marker
    // outranks an equal-length word match.
    #[regex(r"[sS][sS]", priority = 6)]
    SsKw,

    #[regex(r"[A-Za-z_]+")]
    Word,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("+")]
    Plus,
    #[token("@")]
    At,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => TokenKind::WHITESPACE,

            SetsReps => TokenKind::SETS_REPS,
            Integer => TokenKind::INTEGER,
            SsKw => TokenKind::SS_KW,
            Word => TokenKind::WORD,

            Comma => TokenKind::COMMA,
            Semicolon => TokenKind::SEMICOLON,
            Plus => TokenKind::PLUS,
            At => TokenKind::AT,
            Minus => TokenKind::MINUS,
            Slash => TokenKind::SLASH,
            Dot => TokenKind::DOT,
            Colon => TokenKind::COLON,
            LParen => TokenKind::L_PAREN,
            RParen => TokenKind::R_PAREN,
        }
    }
}
