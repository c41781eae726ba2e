//! Normal form for media query trees.
//!
//! Normalization runs bottom-up:
//!
//! - `And` children are flattened into their parent, then passed through
//!   [`merge_intervals_for_and`]. An `And` with nothing left, or with an
//!   unsatisfiable child, becomes `not all`. Bare `all` children are dropped.
//! - `Or` children are flattened into their parent the same way.
//!   Unsatisfiable children are dropped and an `all` child absorbs the rest.
//! - `Not` cancels against an inner `Not` and flips keyword negation, so
//!   `not (not all)` is `all`.
//!
//! Single-child `And`/`Or` collapse to the child.

use crate::interval::{Axis, Interval, RangeBound};
use crate::MediaQueryRule;
use tracing::trace;

/// Reduce `rule` to normal form.
pub fn normalize(rule: MediaQueryRule) -> MediaQueryRule {
    match rule {
        MediaQueryRule::And(rules) => {
            let mut flat = Vec::with_capacity(rules.len());
            let mut dropped_everything = false;
            for rule in rules {
                match normalize(rule) {
                    MediaQueryRule::And(inner) => flat.extend(inner),
                    everything if everything.is_everything() => dropped_everything = true,
                    other => flat.push(other),
                }
            }
            if flat.is_empty() && dropped_everything {
                return MediaQueryRule::EVERYTHING;
            }
            collapse_and(merge_intervals_for_and(flat))
        }
        MediaQueryRule::Or(rules) => {
            let mut flat = Vec::with_capacity(rules.len());
            for rule in rules {
                match normalize(rule) {
                    MediaQueryRule::Or(inner) => flat.extend(inner),
                    other => flat.push(other),
                }
            }
            collapse_or(flat)
        }
        MediaQueryRule::Not(inner) => match normalize(*inner) {
            MediaQueryRule::Keyword { key, not, only } => MediaQueryRule::Keyword {
                key,
                not: !not,
                only,
            },
            MediaQueryRule::Not(negated) => *negated,
            other => MediaQueryRule::not(other),
        },
        terminal @ (MediaQueryRule::Keyword { .. }
        | MediaQueryRule::Word(_)
        | MediaQueryRule::Pair { .. }) => terminal,
    }
}

/// Intersect the width/height bounds of a flattened `And`.
///
/// Returns the list with every bound merged into at most one `min-` and one
/// `max-` per axis, or an empty list if some axis is unsatisfiable. If any
/// rule is not a (possibly negated) dimension bound, or bounds on one axis mix
/// units, the list is returned unchanged.
///
/// A list holding exactly one negated two-term range is split into an `Or`
/// of the two ways to fall outside it, each branch merged on its own.
pub fn merge_intervals_for_and(mut rules: Vec<MediaQueryRule>) -> Vec<MediaQueryRule> {
    if let Some(terms) = take_negated_range(&mut rules) {
        return expand_negated_range(rules, terms);
    }

    let mut width = Interval::default();
    let mut height = Interval::default();
    for rule in &rules {
        let Some(bound) = RangeBound::from_rule(rule) else {
            return rules;
        };
        let interval = match bound.axis {
            Axis::Width => &mut width,
            Axis::Height => &mut height,
        };
        if !interval.constrain(bound) {
            trace!("mixed units in range; skipping interval merge");
            return rules;
        }
    }

    if width.is_empty() || height.is_empty() {
        trace!(?width, ?height, "range intersection is empty");
        return Vec::new();
    }

    let mut merged = Vec::with_capacity(4);
    width.emit(Axis::Width, &mut merged);
    height.emit(Axis::Height, &mut merged);
    merged
}

/// Remove and return the terms of the only `not (a and b)` in `rules`.
fn take_negated_range(rules: &mut Vec<MediaQueryRule>) -> Option<[MediaQueryRule; 2]> {
    let positions: Vec<usize> = rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| is_negated_range(rule))
        .map(|(index, _)| index)
        .collect();
    let &[index] = positions.as_slice() else {
        return None;
    };
    match rules.remove(index) {
        MediaQueryRule::Not(inner) => match *inner {
            MediaQueryRule::And(terms) => <[MediaQueryRule; 2]>::try_from(terms).ok(),
            _ => None,
        },
        _ => None,
    }
}

fn is_negated_range(rule: &MediaQueryRule) -> bool {
    matches!(rule, MediaQueryRule::Not(inner)
        if matches!(inner.as_ref(), MediaQueryRule::And(terms) if terms.len() == 2))
}

/// `siblings and not (a and b)` is `(siblings and not a) or (siblings and not b)`.
fn expand_negated_range(
    siblings: Vec<MediaQueryRule>,
    terms: [MediaQueryRule; 2],
) -> Vec<MediaQueryRule> {
    trace!(siblings = siblings.len(), "expanding negated range");
    let branches: Vec<MediaQueryRule> = terms
        .into_iter()
        .map(|term| {
            let mut branch = siblings.clone();
            branch.push(MediaQueryRule::not(term));
            normalize(MediaQueryRule::And(branch))
        })
        .filter(|branch| !branch.is_nothing())
        .collect();
    match branches.len() {
        0 => Vec::new(),
        1 => branches,
        _ => vec![MediaQueryRule::Or(branches)],
    }
}

fn collapse_and(mut rules: Vec<MediaQueryRule>) -> MediaQueryRule {
    if rules.iter().any(MediaQueryRule::is_nothing) {
        return MediaQueryRule::NOTHING;
    }
    if rules.len() > 1 {
        return MediaQueryRule::And(rules);
    }
    rules.pop().unwrap_or(MediaQueryRule::NOTHING)
}

fn collapse_or(mut rules: Vec<MediaQueryRule>) -> MediaQueryRule {
    if rules.iter().any(MediaQueryRule::is_everything) {
        return MediaQueryRule::EVERYTHING;
    }
    rules.retain(|rule| !rule.is_nothing());
    if rules.len() > 1 {
        return MediaQueryRule::Or(rules);
    }
    rules.pop().unwrap_or(MediaQueryRule::NOTHING)
}
