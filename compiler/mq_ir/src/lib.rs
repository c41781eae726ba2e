//! Media query IR.
//!
//! Defines the rule tree produced by the media query grammar, its normal form
//! (flattened, negation-minimal, interval-merged), and the canonical
//! `@media ...` rendering.

mod display;
mod interval;
mod normalize;
mod query;
mod rule;

pub use interval::{Axis, BoundKind, RangeBound, EPSILON};
pub use normalize::{merge_intervals_for_and, normalize};
pub use query::MediaQuery;
pub use rule::{MediaQueryRule, MediaType, PairValue, WordFeature};
