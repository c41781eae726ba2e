//! CSS lexer for media queries using logos.
//!
//! Produces typed [`Token`]s either eagerly ([`tokenize`]) or on demand
//! through a backtrackable [`TokenCursor`].
//!
//! Tokenization never fails: any character no pattern recognises becomes a
//! [`TokenKind::Delim`], and it is up to the grammar to reject it.

mod cursor;
mod token;

pub use cursor::TokenCursor;
pub use token::{Span, Token, TokenKind};

use logos::Logos;

/// Raw token from logos (before value decoding).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")] // Skip comments
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"@(--|-?[a-zA-Z_])[a-zA-Z0-9_-]*")]
    AtKeyword,

    #[regex(r"(--|-?[a-zA-Z_])[a-zA-Z0-9_-]*\(")]
    Function,

    #[regex(r"(--|-?[a-zA-Z_])[a-zA-Z0-9_-]*")]
    Ident,

    #[regex(r"[+-]?([0-9]+|[0-9]*\.[0-9]+)[a-zA-Z]+")]
    Dimension,

    #[regex(r"[+-]?([0-9]+|[0-9]*\.[0-9]+)%")]
    Percentage,

    #[regex(r"[+-]?([0-9]+|[0-9]*\.[0-9]+)")]
    Number,

    #[regex(r#""[^"]*"|'[^']*'"#)]
    String,

    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Delimiters the grammar cares about
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("/")]
    Slash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token(".")]
    Dot,
}

/// Lex the whole source. The last token is always `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        push_lexed(token_result, logos.span(), logos.slice(), &mut tokens);
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));
    tokens
}

/// Convert one logos result into tokens, appending to `out`.
///
/// A logos error becomes one `Delim` per character of the unmatched slice.
pub(crate) fn push_lexed(
    result: Result<RawToken, ()>,
    range: std::ops::Range<usize>,
    slice: &str,
    out: &mut Vec<Token>,
) {
    match result {
        Ok(raw) => out.push(Token::new(convert_token(raw, slice), Span::from_range(range))),
        Err(()) => {
            for (offset, c) in slice.char_indices() {
                let start = range.start + offset;
                let span = Span::from_range(start..start + c.len_utf8());
                out.push(Token::new(TokenKind::Delim(c), span));
            }
        }
    }
}

/// Convert a raw token to a `TokenKind`, decoding names and numbers.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Whitespace => TokenKind::Whitespace,
        RawToken::AtKeyword => TokenKind::AtKeyword(slice.trim_start_matches('@').to_owned()),
        RawToken::Function => TokenKind::Function(slice.trim_end_matches('(').to_owned()),
        RawToken::Ident => TokenKind::Ident(slice.to_owned()),
        RawToken::Dimension => {
            let split = slice
                .find(|c: char| c.is_ascii_alphabetic())
                .unwrap_or(slice.len());
            let (number, unit) = slice.split_at(split);
            number.parse().map_or_else(
                |_| delim(slice),
                |value| TokenKind::Dimension {
                    value,
                    unit: unit.to_owned(),
                },
            )
        }
        RawToken::Percentage => slice
            .trim_end_matches('%')
            .parse()
            .map_or_else(|_| delim(slice), TokenKind::Percentage),
        RawToken::Number => slice
            .parse()
            .map_or_else(|_| delim(slice), TokenKind::Number),
        RawToken::String => TokenKind::String(slice[1..slice.len() - 1].to_owned()),
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Lt
        | RawToken::Gt
        | RawToken::Eq
        | RawToken::Slash
        | RawToken::Plus
        | RawToken::Minus
        | RawToken::Star
        | RawToken::Dot => delim(slice),
    }
}

fn delim(slice: &str) -> TokenKind {
    TokenKind::Delim(slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER))
}
