//! "Last media query wins" rewriting of style trees.
//!
//! Authors write sibling `@media` conditions in priority order: when several
//! match, the last one should apply. Atomic CSS gives no control over rule
//! order in the final stylesheet, so each condition is rewritten to exclude
//! every condition written after it:
//!
//! ```text
//! Q1, Q2, Q3  ->  Q1 and not Q2 and not Q3,  Q2 and not Q3,  Q3
//! ```
//!
//! At most one rewritten condition matches any environment, and it is the
//! one that would have won.

use mq_ir::{MediaQuery, MediaQueryRule};
use mq_parse::{parse_media_query, ParseError};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

/// Keys starting with this are conditions; every other key is a property or
/// the `default` bucket.
pub const MEDIA_PREFIX: &str = "@media ";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("invalid media query `{key}`")]
    InvalidMediaQuery { key: String, source: ParseError },
}

/// Rewrite sibling `@media` keys so that they are mutually exclusive.
///
/// Returns a new tree; `styles` is not modified. Top-level keys are never
/// rewritten, arrays are copied as-is, and a non-object root is returned
/// unchanged. Rewritten keys keep their position among their siblings.
#[tracing::instrument(level = "debug", skip_all)]
pub fn last_media_query_wins_transform(styles: &Value) -> Result<Value, TransformError> {
    transform(styles, 0)
}

fn transform(value: &Value, depth: usize) -> Result<Value, TransformError> {
    let Value::Object(map) = value else {
        return Ok(value.clone());
    };
    let mut children = Map::with_capacity(map.len());
    for (key, child) in map {
        children.insert(key.clone(), transform(child, depth + 1)?);
    }
    if depth == 0 {
        return Ok(Value::Object(children));
    }
    rewrite_media_keys(children).map(Value::Object)
}

fn rewrite_media_keys(map: Map<String, Value>) -> Result<Map<String, Value>, TransformError> {
    let queries = map
        .keys()
        .filter(|key| key.starts_with(MEDIA_PREFIX))
        .map(|key| {
            parse_media_query(key).map_err(|source| TransformError::InvalidMediaQuery {
                key: key.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if queries.is_empty() {
        return Ok(map);
    }

    let mut remaining = queries.as_slice();
    let mut rewritten = Map::with_capacity(map.len());
    for (key, value) in map {
        if key.starts_with(MEDIA_PREFIX) {
            if let Some((current, later)) = remaining.split_first() {
                let exclusive = exclude_later(current, later).to_string();
                debug!(from = %key, to = %exclusive, "rewrote media query");
                remaining = later;
                rewritten.insert(exclusive, value);
                continue;
            }
        }
        rewritten.insert(key, value);
    }
    Ok(rewritten)
}

/// `current and not later[0] and not later[1] ...`
///
/// An `or` query is distributed so that every branch excludes the later
/// queries on its own.
fn exclude_later(current: &MediaQuery, later: &[MediaQuery]) -> MediaQuery {
    let negations: Vec<MediaQueryRule> = later
        .iter()
        .map(|query| MediaQueryRule::not(query.queries().clone()))
        .collect();
    let combined = match current.queries() {
        MediaQueryRule::Or(branches) => MediaQueryRule::Or(
            branches
                .iter()
                .map(|branch| and_all(branch.clone(), &negations))
                .collect(),
        ),
        rule => and_all(rule.clone(), &negations),
    };
    MediaQuery::new(combined)
}

fn and_all(rule: MediaQueryRule, negations: &[MediaQueryRule]) -> MediaQueryRule {
    let mut rules = Vec::with_capacity(negations.len() + 1);
    rules.push(rule);
    rules.extend_from_slice(negations);
    MediaQueryRule::And(rules)
}
