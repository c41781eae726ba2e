//! Token-level parsers.
//!
//! Each of these consumes at most one token. Identifier-like matches ignore
//! ASCII case.

use crate::{ParseFailure, Parser};
use mq_lexer::TokenKind;
use std::rc::Rc;

/// Consume one token if `select` maps it to a value.
pub fn token_where<T: 'static>(
    label: impl Into<Rc<str>>,
    select: impl Fn(&TokenKind) -> Option<T> + 'static,
) -> Parser<T> {
    let label: Rc<str> = label.into();
    let reported = Rc::clone(&label);
    Parser::new(label, move |cursor| {
        let position = cursor.position();
        let selected = cursor.peek().and_then(|token| select(&token.kind));
        match selected {
            Some(value) => {
                cursor.consume();
                Ok(value)
            }
            None => Err(ParseFailure::new(Rc::clone(&reported), position)),
        }
    })
}

pub fn any_token() -> Parser<TokenKind> {
    token_where("any token", |kind| Some(kind.clone()))
}

pub fn whitespace() -> Parser<()> {
    token_where("whitespace", |kind| {
        matches!(kind, TokenKind::Whitespace).then_some(())
    })
}

pub fn optional_whitespace() -> Parser<()> {
    whitespace().optional().map(|_| ())
}

/// The identifier `name`.
pub fn keyword(name: &'static str) -> Parser<()> {
    token_where(format!("`{name}`"), move |kind| kind.is_ident(name).then_some(()))
}

/// Any identifier except a `--custom` property name.
pub fn ident() -> Parser<String> {
    token_where("identifier", |kind| match kind {
        TokenKind::Ident(name) if !name.starts_with("--") => Some(name.clone()),
        _ => None,
    })
}

/// The at-keyword `@name`.
pub fn at_keyword(name: &'static str) -> Parser<()> {
    token_where(format!("`@{name}`"), move |kind| {
        matches!(kind, TokenKind::AtKeyword(at) if at.eq_ignore_ascii_case(name)).then_some(())
    })
}

/// The function opener `name(`.
pub fn function(name: &'static str) -> Parser<()> {
    token_where(format!("`{name}(`"), move |kind| {
        matches!(kind, TokenKind::Function(function) if function.eq_ignore_ascii_case(name))
            .then_some(())
    })
}

pub fn delim(c: char) -> Parser<()> {
    token_where(format!("`{c}`"), move |kind| {
        matches!(kind, TokenKind::Delim(d) if *d == c).then_some(())
    })
}

fn punctuation(expected: TokenKind) -> Parser<()> {
    let label = format!("`{expected}`");
    token_where(label, move |kind| (*kind == expected).then_some(()))
}

pub fn colon() -> Parser<()> {
    punctuation(TokenKind::Colon)
}

pub fn comma() -> Parser<()> {
    punctuation(TokenKind::Comma)
}

pub fn lparen() -> Parser<()> {
    punctuation(TokenKind::LParen)
}

pub fn rparen() -> Parser<()> {
    punctuation(TokenKind::RParen)
}

pub fn number() -> Parser<f64> {
    token_where("number", |kind| match kind {
        TokenKind::Number(value) => Some(*value),
        _ => None,
    })
}

/// A number with a unit, e.g. `600px`.
pub fn dimension() -> Parser<(f64, String)> {
    token_where("dimension", |kind| match kind {
        TokenKind::Dimension { value, unit } => Some((*value, unit.clone())),
        _ => None,
    })
}
