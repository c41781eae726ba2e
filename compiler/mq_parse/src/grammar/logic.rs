//! `not`, `and`, `or`, and parenthesized groups.
//!
//! The rules are mutually recursive: a group or `not` holds a whole
//! `or_chain`. Each recursive reference goes through [`Parser::lazy`], so a
//! chain's parser tree only grows as deep as the input actually nests.

use super::features::{keyword_rule, pair, word};
use super::range::{double_inequality, inequality};
use super::{collapse, parenthesized};
use crate::primitives::{keyword, whitespace};
use crate::{sequence, Parser};
use mq_ir::MediaQueryRule;

/// One comma-separated part of a media query.
pub(super) fn query_set() -> Parser<MediaQueryRule> {
    let negated = or_chain()
        .prefixed_by(keyword("not").skip(whitespace()))
        .map(MediaQueryRule::not);
    or_chain().or(negated).labelled("media query")
}

fn or_chain() -> Parser<MediaQueryRule> {
    chain(and_chain(), "or", MediaQueryRule::Or)
}

fn and_chain() -> Parser<MediaQueryRule> {
    chain(operand(), "and", MediaQueryRule::And)
}

/// `operand (ws word ws operand)*`, collapsing a lone operand.
fn chain(
    operand: Parser<MediaQueryRule>,
    word: &'static str,
    combine: fn(Vec<MediaQueryRule>) -> MediaQueryRule,
) -> Parser<MediaQueryRule> {
    let connective: Parser<Vec<()>> =
        sequence(vec![whitespace(), keyword(word), whitespace()]).into();
    let operands: Parser<Vec<MediaQueryRule>> =
        operand.one_or_more().separated_by(connective).into();
    operands.map(move |rules| collapse(rules, combine))
}

/// Media types are accepted inside groups too, so a negated compound such as
/// `(not (screen and (color)))` reads back the way it renders.
fn operand() -> Parser<MediaQueryRule> {
    Parser::one_of(vec![
        keyword_rule(),
        not_rule(),
        double_inequality(),
        inequality(),
        pair(),
        word(),
        group(),
    ])
    .labelled("media condition")
}

/// `(not <condition>)`
fn not_rule() -> Parser<MediaQueryRule> {
    let condition = Parser::lazy("media condition", or_chain);
    parenthesized(condition.prefixed_by(keyword("not").skip(whitespace())))
        .map(MediaQueryRule::not)
}

/// `(<condition>)`
fn group() -> Parser<MediaQueryRule> {
    parenthesized(Parser::lazy("media condition", or_chain))
}
