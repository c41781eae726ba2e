//! Range features over the viewport dimensions.
//!
//! CSS `min-`/`max-` features are inclusive. Strict inequalities and the
//! complement of a bound are expressed by nudging the boundary by
//! [`EPSILON`] in the bound's own unit.

use crate::{MediaQueryRule, PairValue};

/// Boundary nudge used to emulate open intervals.
pub const EPSILON: f64 = 0.01;

/// Viewport dimension a range feature constrains.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    /// Look up an axis by feature name (`width`/`height`), ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Axis::Width, Axis::Height]
            .into_iter()
            .find(|axis| axis.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }

    /// Feature name for a bound on this axis, e.g. `min-width`.
    pub fn feature(self, kind: BoundKind) -> &'static str {
        match (kind, self) {
            (BoundKind::Min, Axis::Width) => "min-width",
            (BoundKind::Max, Axis::Width) => "max-width",
            (BoundKind::Min, Axis::Height) => "min-height",
            (BoundKind::Max, Axis::Height) => "max-height",
        }
    }
}

/// Which end of an interval a bound closes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundKind {
    Min,
    Max,
}

impl BoundKind {
    pub fn opposite(self) -> Self {
        match self {
            BoundKind::Min => BoundKind::Max,
            BoundKind::Max => BoundKind::Min,
        }
    }
}

/// One inclusive `min-`/`max-` constraint on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeBound {
    pub axis: Axis,
    pub kind: BoundKind,
    pub value: f64,
    pub unit: String,
}

impl RangeBound {
    pub fn new(axis: Axis, kind: BoundKind, value: f64, unit: impl Into<String>) -> Self {
        RangeBound {
            axis,
            kind,
            value,
            unit: unit.into(),
        }
    }

    /// Recognise `(min-width: 10px)` and friends.
    ///
    /// Only dimension values qualify; bare numbers and `calc()` do not.
    pub fn from_pair(key: &str, value: &PairValue) -> Option<Self> {
        let PairValue::Dimension { value, unit } = value else {
            return None;
        };
        let (kind, axis) = if let Some(name) = key.strip_prefix("min-") {
            (BoundKind::Min, Axis::from_name(name)?)
        } else if let Some(name) = key.strip_prefix("max-") {
            (BoundKind::Max, Axis::from_name(name)?)
        } else {
            return None;
        };
        Some(RangeBound::new(axis, kind, *value, unit.clone()))
    }

    /// Recognise a bound or a negated bound.
    pub fn from_rule(rule: &MediaQueryRule) -> Option<Self> {
        match rule {
            MediaQueryRule::Pair { key, value } => RangeBound::from_pair(key, value),
            MediaQueryRule::Not(inner) => match inner.as_ref() {
                MediaQueryRule::Pair { key, value } => {
                    RangeBound::from_pair(key, value).map(RangeBound::complement)
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Turn an inclusive bound into an exclusive one.
    ///
    /// `min` moves up and `max` moves down by [`EPSILON`].
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.value = match self.kind {
            BoundKind::Min => self.value + EPSILON,
            BoundKind::Max => self.value - EPSILON,
        };
        self
    }

    /// The bound covering everything this one excludes.
    ///
    /// `not (max-width: 768px)` is `(min-width: 768.01px)`.
    #[must_use]
    pub fn complement(self) -> Self {
        RangeBound {
            kind: self.kind.opposite(),
            ..self
        }
        .exclusive()
    }

    pub fn into_rule(self) -> MediaQueryRule {
        MediaQueryRule::pair(
            self.axis.feature(self.kind),
            PairValue::Dimension {
                value: self.value,
                unit: self.unit,
            },
        )
    }
}

/// Intersection of bounds on one axis.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Interval {
    lower: f64,
    upper: f64,
    unit: Option<String>,
}

impl Default for Interval {
    fn default() -> Self {
        Interval {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            unit: None,
        }
    }
}

impl Interval {
    /// Intersect with `bound`. Returns `false` if its unit differs from the
    /// bounds seen so far; the interval is then left untouched.
    pub(crate) fn constrain(&mut self, bound: RangeBound) -> bool {
        if self.unit.as_ref().is_some_and(|unit| *unit != bound.unit) {
            return false;
        }
        match bound.kind {
            BoundKind::Min => self.lower = self.lower.max(bound.value),
            BoundKind::Max => self.upper = self.upper.min(bound.value),
        }
        self.unit = Some(bound.unit);
        true
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lower > self.upper
    }

    /// Append the finite bounds, `min` first.
    pub(crate) fn emit(self, axis: Axis, out: &mut Vec<MediaQueryRule>) {
        let unit = self.unit.unwrap_or_default();
        if self.lower.is_finite() {
            out.push(RangeBound::new(axis, BoundKind::Min, self.lower, unit.clone()).into_rule());
        }
        if self.upper.is_finite() {
            out.push(RangeBound::new(axis, BoundKind::Max, self.upper, unit).into_rule());
        }
    }
}
