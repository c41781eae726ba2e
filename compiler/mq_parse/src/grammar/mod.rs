//! Media query grammar.
//!
//! ```text
//! media_query = ws? "@media" ws? query_set (ws? "," ws? query_set)* ws?
//! query_set   = or_chain | "not" ws or_chain
//! or_chain    = and_chain (ws "or" ws and_chain)*
//! and_chain   = operand (ws "and" ws operand)*
//! operand     = keyword
//!             | "(" "not" ws or_chain ")"
//!             | range | pair | word
//!             | "(" or_chain ")"
//! ```
//!
//! `and` binds tighter than `or`, and the comma between query sets is a
//! top-level `or`. Whitespace is allowed just inside parentheses and around
//! `:`, comparison operators, and `/`.

mod features;
mod logic;
mod range;

use crate::primitives::{at_keyword, comma, dimension, lparen, optional_whitespace, rparen};
use crate::Parser;
use mq_ir::{MediaQuery, MediaQueryRule};

/// Parser for a complete `@media ...` header.
pub fn media_query() -> Parser<MediaQuery> {
    let separator = comma().surrounded_by(optional_whitespace(), optional_whitespace());
    let sets: Parser<Vec<MediaQueryRule>> = logic::query_set()
        .one_or_more()
        .separated_by(separator)
        .into();
    sets.map(|sets| collapse(sets, MediaQueryRule::Or))
        .prefixed_by(at_keyword("media").surrounded_by(optional_whitespace(), optional_whitespace()))
        .skip(optional_whitespace())
        .map(MediaQuery::new)
}

/// `inner` between parentheses, with optional whitespace just inside them.
fn parenthesized<T: 'static>(inner: Parser<T>) -> Parser<T> {
    inner.surrounded_by(
        lparen().skip(optional_whitespace()),
        optional_whitespace().skip(rparen()),
    )
}

/// `parser` followed by optional whitespace.
fn spaced<T: 'static>(parser: Parser<T>) -> Parser<T> {
    parser.skip(optional_whitespace())
}

/// A dimension with its unit lowercased.
fn length() -> Parser<(f64, String)> {
    dimension().map(|(value, unit)| (value, unit.to_ascii_lowercase()))
}

/// One rule stands alone; several are joined with `combine`.
fn collapse(
    rules: Vec<MediaQueryRule>,
    combine: fn(Vec<MediaQueryRule>) -> MediaQueryRule,
) -> MediaQueryRule {
    match <[MediaQueryRule; 1]>::try_from(rules) {
        Ok([rule]) => rule,
        Err(rules) => combine(rules),
    }
}

#[cfg(test)]
mod tests;
