//! Media query rule tree.
//!
//! `MediaQueryRule` is a plain owned tree: `Not`, `And`, and `Or` own their
//! children outright. Trees built by hand may be in any shape; wrap them in a
//! [`MediaQuery`](crate::MediaQuery) to get the normal form.

/// Media type keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MediaType {
    Screen,
    Print,
    All,
}

impl MediaType {
    /// Look up a media type by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [MediaType::Screen, MediaType::Print, MediaType::All]
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Screen => "screen",
            MediaType::Print => "print",
            MediaType::All => "all",
        }
    }
}

/// Boolean media feature, tested for presence alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordFeature {
    Color,
    Monochrome,
    Grid,
    ColorIndex,
}

impl WordFeature {
    /// Look up a word feature by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            WordFeature::Color,
            WordFeature::Monochrome,
            WordFeature::Grid,
            WordFeature::ColorIndex,
        ]
        .into_iter()
        .find(|feature| feature.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WordFeature::Color => "color",
            WordFeature::Monochrome => "monochrome",
            WordFeature::Grid => "grid",
            WordFeature::ColorIndex => "color-index",
        }
    }
}

/// Value side of a `(key: value)` media feature.
#[derive(Clone, Debug, PartialEq)]
pub enum PairValue {
    /// Number with a unit, e.g. `600px`.
    Dimension { value: f64, unit: String },
    Number(f64),
    Ident(String),
    /// `numerator / denominator`, e.g. an aspect ratio.
    Fraction(f64, f64),
    /// Canonical text of a `calc(...)` expression.
    Calc(String),
}

impl PairValue {
    pub fn dimension(value: f64, unit: impl Into<String>) -> Self {
        PairValue::Dimension {
            value,
            unit: unit.into(),
        }
    }
}

/// A node of the media query tree.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaQueryRule {
    /// `[not] [only] screen|print|all`
    Keyword {
        key: MediaType,
        not: bool,
        only: bool,
    },
    /// `(color)`
    Word(WordFeature),
    /// `(key: value)`
    Pair { key: String, value: PairValue },
    Not(Box<MediaQueryRule>),
    And(Vec<MediaQueryRule>),
    Or(Vec<MediaQueryRule>),
}

impl MediaQueryRule {
    /// `not all`: matches no environment.
    pub const NOTHING: MediaQueryRule = MediaQueryRule::Keyword {
        key: MediaType::All,
        not: true,
        only: false,
    };

    /// `all`: matches every environment.
    pub const EVERYTHING: MediaQueryRule = MediaQueryRule::Keyword {
        key: MediaType::All,
        not: false,
        only: false,
    };

    pub fn keyword(key: MediaType) -> Self {
        MediaQueryRule::Keyword {
            key,
            not: false,
            only: false,
        }
    }

    pub fn pair(key: impl Into<String>, value: PairValue) -> Self {
        MediaQueryRule::Pair {
            key: key.into(),
            value,
        }
    }

    pub fn not(rule: MediaQueryRule) -> Self {
        MediaQueryRule::Not(Box::new(rule))
    }

    /// Check if this is the `not all` sentinel.
    pub fn is_nothing(&self) -> bool {
        *self == Self::NOTHING
    }

    /// Check if this is the `all` sentinel.
    pub fn is_everything(&self) -> bool {
        *self == Self::EVERYTHING
    }
}
