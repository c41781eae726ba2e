//! Terminal rules: media types, word features, and `(key: value)` pairs.

use super::{length, parenthesized, spaced};
use crate::primitives::{colon, delim, function, ident, keyword, number, token_where, whitespace};
use crate::{ParseFailure, Parser};
use mq_ir::{MediaQueryRule, MediaType, PairValue, WordFeature};
use mq_lexer::TokenKind;

fn media_type() -> Parser<MediaType> {
    token_where("media type", |kind| match kind {
        TokenKind::Ident(name) => MediaType::from_name(name),
        _ => None,
    })
}

/// `[not] [only] screen|print|all`
pub(super) fn keyword_rule() -> Parser<MediaQueryRule> {
    let flag = |word: &'static str| {
        keyword(word)
            .skip(whitespace())
            .optional()
            .map(|seen| seen.is_some())
    };
    flag("not")
        .then(flag("only"))
        .then(media_type())
        .map(|((not, only), key)| MediaQueryRule::Keyword { key, not, only })
}

/// `(color)`
pub(super) fn word() -> Parser<MediaQueryRule> {
    let feature = token_where("media feature", |kind| match kind {
        TokenKind::Ident(name) => WordFeature::from_name(name),
        _ => None,
    });
    parenthesized(feature).map(MediaQueryRule::Word)
}

/// `(key: value)`
pub(super) fn pair() -> Parser<MediaQueryRule> {
    let key = ident().map(|key| key.to_ascii_lowercase());
    let body = spaced(key).skip(spaced(colon())).then(pair_value());
    parenthesized(body).map(|(key, value)| MediaQueryRule::Pair { key, value })
}

fn pair_value() -> Parser<PairValue> {
    Parser::one_of(vec![
        calc(),
        length().map(|(value, unit)| PairValue::Dimension { value, unit }),
        ident().map(PairValue::Ident),
        fraction(),
        number().map(PairValue::Number),
    ])
    .labelled("media feature value")
}

/// `16 / 9`
fn fraction() -> Parser<PairValue> {
    spaced(number())
        .skip(spaced(delim('/')))
        .then(number())
        .map(|(numerator, denominator)| PairValue::Fraction(numerator, denominator))
}

/// `calc(...)`, kept as canonical text.
///
/// Everything up to the matching `)` is accepted except custom property
/// references, which cannot be resolved at build time.
fn calc() -> Parser<PairValue> {
    let opener = function("calc");
    Parser::new("calc()", move |cursor| {
        let start = cursor.position();
        let failure = || ParseFailure::new("calc()", start);
        opener.parse(cursor)?;

        let mut text = String::from("calc(");
        let mut depth = 1usize;
        while depth > 0 {
            let Some(token) = cursor.consume() else {
                return Err(failure());
            };
            let kind = token.kind.clone();
            match &kind {
                TokenKind::Function(name) if name.eq_ignore_ascii_case("var") => {
                    return Err(failure());
                }
                TokenKind::Ident(name) if name.starts_with("--") => return Err(failure()),
                TokenKind::Function(_) | TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            push_canonical(&mut text, &kind);
        }
        Ok(PairValue::Calc(text))
    })
}

/// Whitespace collapses to one space and never sits just inside parentheses.
fn push_canonical(text: &mut String, kind: &TokenKind) {
    match kind {
        TokenKind::Whitespace => {
            if !text.ends_with(['(', ' ']) {
                text.push(' ');
            }
        }
        TokenKind::RParen => {
            if text.ends_with(' ') {
                text.pop();
            }
            text.push(')');
        }
        other => text.push_str(&other.to_string()),
    }
}
