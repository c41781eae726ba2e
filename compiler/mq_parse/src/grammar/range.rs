//! Range syntax.
//!
//! `(width > 400px)`, `(400px >= width)`, and `(100px < width <= 400px)`
//! rewrite to inclusive `min-`/`max-` features. A strict comparison moves the
//! boundary by [`EPSILON`](mq_ir::EPSILON) toward the inside of the range.

use super::{length, parenthesized, spaced};
use crate::primitives::{delim, token_where};
use crate::Parser;
use mq_ir::{Axis, BoundKind, MediaQueryRule, RangeBound};
use mq_lexer::TokenKind;

#[derive(Copy, Clone, Debug)]
struct Comparison {
    less: bool,
    inclusive: bool,
}

fn comparison() -> Parser<Comparison> {
    delim('<')
        .map(|()| true)
        .or(delim('>').map(|()| false))
        .then(delim('=').optional())
        .map(|(less, eq)| Comparison {
            less,
            inclusive: eq.is_some(),
        })
        .labelled("`<` or `>`")
}

fn axis() -> Parser<Axis> {
    token_where("`width` or `height`", |kind| match kind {
        TokenKind::Ident(name) => Axis::from_name(name),
        _ => None,
    })
}

/// Bound for `axis <op> value`, or `value <op> axis` when `!axis_first`.
fn bound(
    axis: Axis,
    comparison: Comparison,
    (value, unit): (f64, String),
    axis_first: bool,
) -> MediaQueryRule {
    let kind = if comparison.less == axis_first {
        BoundKind::Max
    } else {
        BoundKind::Min
    };
    let bound = RangeBound::new(axis, kind, value, unit);
    if comparison.inclusive {
        bound.into_rule()
    } else {
        bound.exclusive().into_rule()
    }
}

/// `(width < 400px)` or `(400px > width)`
pub(super) fn inequality() -> Parser<MediaQueryRule> {
    let forward = spaced(axis())
        .then(spaced(comparison()))
        .then(length())
        .map(|((axis, comparison), value)| bound(axis, comparison, value, true));
    let reversed = spaced(length())
        .then(spaced(comparison()))
        .then(axis())
        .map(|((value, comparison), axis)| bound(axis, comparison, value, false));
    parenthesized(forward.or(reversed))
}

/// `(100px < width <= 400px)`: one bound per side, in written order.
pub(super) fn double_inequality() -> Parser<MediaQueryRule> {
    let body = spaced(length())
        .then(spaced(comparison()))
        .then(spaced(axis()))
        .then(spaced(comparison()))
        .then(length())
        .map(|((((left, first), axis), second), right)| {
            MediaQueryRule::And(vec![
                bound(axis, first, left, false),
                bound(axis, second, right, true),
            ])
        });
    parenthesized(body)
}
