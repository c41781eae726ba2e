use super::*;
use mq_ir::{MediaQueryRule, MediaType, PairValue, WordFeature};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// === validate_media_query ===

#[test]
fn validate_reports_unbalanced_parens() {
    assert_eq!(
        validate_media_query("@media (width: 600px"),
        Err(MediaQueryError::UnbalancedParens)
    );
    assert_eq!(
        validate_media_query("@media (color))"),
        Err(MediaQueryError::UnbalancedParens)
    );
    assert_eq!(
        validate_media_query("@media )(color"),
        Err(MediaQueryError::UnbalancedParens)
    );
}

#[test]
fn validate_reports_syntax_errors() {
    assert_eq!(
        validate_media_query("@media and (min-width: 600px)"),
        Err(MediaQueryError::SyntaxError)
    );
    assert_eq!(
        validate_media_query("@media (min-width: var(--x))"),
        Err(MediaQueryError::SyntaxError)
    );
    assert_eq!(
        validate_media_query("@media (color) extra"),
        Err(MediaQueryError::SyntaxError)
    );
}

#[test]
fn validate_accepts_valid_queries() {
    let query = validate_media_query("@media (width > 400px)");
    assert_eq!(
        query.map(|query| query.to_string()),
        Ok("@media (min-width: 400.01px)".to_owned())
    );
}

#[test]
fn paren_scan() {
    assert!(has_balanced_parens(""));
    assert!(has_balanced_parens("((a)(b))"));
    assert!(!has_balanced_parens("(()"));
    assert!(!has_balanced_parens("())("));
}

// === Round trip ===

const CORPUS: &[&str] = &[
    "@media screen",
    "@media not print",
    "@media only screen and (min-width: 600px)",
    "@media (width > 400px) and (height <= 900px)",
    "@media (400px < width < 800px), print and (color)",
    "@media (not ((min-width: 400px) and (max-width: 800px)))",
    "@media (max-width: 1200px) and (not ((min-width: 768px) and (max-width: 1024px)))",
    "@media (color) and ((grid) or ((monochrome) and (min-height: 10em)))",
    "@media not (color) and (grid)",
    "@media (aspect-ratio: 16 / 9) or (orientation: portrait)",
    "@media (min-width: calc(100% - 2 * 10px))",
    "@media (min-width: 600px) and (max-width: 400px)",
    "@media (color) or ((grid) or (monochrome))",
    "@media (max-width: 1000px) and (not (screen and (min-width: 500px) and (color)))",
    "@media (color) and ((not screen) or (grid))",
    "@media (not ((not print) and (color)))",
];

#[test]
fn corpus_round_trips() {
    for raw in CORPUS {
        let first = parse_media_query(raw).map_err(|error| format!("{raw}: {error}"));
        let second = first
            .clone()
            .and_then(|query| {
                parse_media_query(&query.to_string()).map_err(|error| format!("{query}: {error}"))
            });
        assert_eq!(first, second, "{raw}");
    }
}

fn length() -> impl Strategy<Value = f64> {
    (0u32..2000).prop_map(f64::from)
}

fn leaf() -> impl Strategy<Value = MediaQueryRule> {
    let bound = (
        prop::sample::select(vec!["min-width", "max-width", "min-height", "max-height"]),
        length(),
        prop::sample::select(vec!["px", "em"]),
    )
        .prop_map(|(key, value, unit)| MediaQueryRule::pair(key, PairValue::dimension(value, unit)));
    prop_oneof![
        4 => bound,
        1 => prop::sample::select(vec![
            WordFeature::Color,
            WordFeature::Monochrome,
            WordFeature::Grid,
            WordFeature::ColorIndex,
        ])
        .prop_map(MediaQueryRule::Word),
        1 => (1u32..32, 1u32..32).prop_map(|(n, d)| {
            MediaQueryRule::pair("aspect-ratio", PairValue::Fraction(f64::from(n), f64::from(d)))
        }),
        1 => prop::sample::select(vec!["portrait", "landscape"])
            .prop_map(|value| MediaQueryRule::pair("orientation", PairValue::Ident(value.to_owned()))),
        1 => (prop::sample::select(vec![MediaType::Screen, MediaType::Print]), any::<bool>())
            .prop_map(|(key, not)| MediaQueryRule::Keyword { key, not, only: false }),
    ]
}

/// Condition trees over every leaf kind except the `all` sentinels.
fn condition() -> impl Strategy<Value = MediaQueryRule> {
    leaf().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(MediaQueryRule::not),
            prop::collection::vec(inner.clone(), 2..4).prop_map(MediaQueryRule::And),
            prop::collection::vec(inner, 2..4).prop_map(MediaQueryRule::Or),
        ]
    })
}

proptest! {
    #[test]
    fn serialized_queries_parse_back(rule in condition()) {
        let query = MediaQuery::new(rule);
        let reparsed = parse_media_query(&query.to_string());
        prop_assert_eq!(reparsed, Ok(query));
    }
}
