//! Token and span types produced by the CSS lexer.

use std::fmt;
use std::ops::Range;

/// Source location span.
///
/// Byte offsets into the lexed source; `end` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create an empty span at `pos`.
    #[inline]
    pub const fn point(pos: u32) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Create a span from a byte range, saturating at `u32::MAX`.
    pub fn from_range(range: Range<usize>) -> Self {
        Span {
            start: u32::try_from(range.start).unwrap_or(u32::MAX),
            end: u32::try_from(range.end).unwrap_or(u32::MAX),
        }
    }

    /// The span as a `usize` range, suitable for slicing the source.
    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// A lexical unit with its location.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds recognised by the lexer.
///
/// Names and values are decoded: `Function` holds the name without the
/// opening paren, `AtKeyword` the name without `@`, and numeric tokens hold
/// their signed value.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Ident(String),
    AtKeyword(String),
    Function(String),
    Dimension { value: f64, unit: String },
    Number(f64),
    Percentage(f64),
    String(String),
    Delim(char),
    Colon,
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Whitespace,
    Eof,
}

impl TokenKind {
    /// Check if this is an identifier equal to `name`, ignoring ASCII case.
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self, TokenKind::Ident(ident) if ident.eq_ignore_ascii_case(name))
    }
}

/// Canonical CSS text of the token.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::AtKeyword(name) => write!(f, "@{name}"),
            TokenKind::Function(name) => write!(f, "{name}("),
            TokenKind::Dimension { value, unit } => write!(f, "{value}{unit}"),
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::Percentage(value) => write!(f, "{value}%"),
            TokenKind::String(text) => write!(f, "\"{text}\""),
            TokenKind::Delim(c) => write!(f, "{c}"),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::Whitespace => f.write_str(" "),
            TokenKind::Eof => Ok(()),
        }
    }
}
