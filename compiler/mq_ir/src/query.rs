//! Normalized media query.

use crate::{normalize, MediaQueryRule};

/// A media query whose rule tree is always in normal form.
///
/// Construction normalizes, so two queries that normalize to the same tree
/// compare equal regardless of how they were written.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    queries: MediaQueryRule,
}

impl MediaQuery {
    pub fn new(rule: MediaQueryRule) -> Self {
        MediaQuery {
            queries: normalize(rule),
        }
    }

    /// The normalized root rule.
    #[inline]
    pub fn queries(&self) -> &MediaQueryRule {
        &self.queries
    }

    pub fn into_queries(self) -> MediaQueryRule {
        self.queries
    }
}

impl From<MediaQueryRule> for MediaQuery {
    fn from(rule: MediaQueryRule) -> Self {
        MediaQuery::new(rule)
    }
}
