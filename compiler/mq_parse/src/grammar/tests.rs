use super::range::{double_inequality, inequality};
use super::*;
use crate::{parse_media_query, ParseError};
use mq_ir::{MediaType, PairValue, WordFeature};
use pretty_assertions::assert_eq;

fn canonical(raw: &str) -> String {
    match parse_media_query(raw) {
        Ok(query) => query.to_string(),
        Err(error) => panic!("{raw:?} did not parse: {error}"),
    }
}

fn px(key: &str, value: f64) -> MediaQueryRule {
    MediaQueryRule::pair(key, PairValue::dimension(value, "px"))
}

// === Terminals ===

#[test]
fn media_types() {
    assert_eq!(canonical("@media screen"), "@media screen");
    assert_eq!(canonical("@media only print"), "@media only print");
    assert_eq!(canonical("@media not all"), "@media not all");
    assert_eq!(canonical("@media not only screen"), "@media not only screen");
}

#[test]
fn word_features() {
    assert_eq!(canonical("@media (color)"), "@media (color)");
    assert_eq!(canonical("@media ( color-index )"), "@media (color-index)");
    assert!(parse_media_query("@media (hover)").is_err());
}

#[test]
fn pair_values() {
    assert_eq!(canonical("@media (min-width:600px)"), "@media (min-width: 600px)");
    assert_eq!(
        canonical("@media (orientation: landscape)"),
        "@media (orientation: landscape)"
    );
    assert_eq!(canonical("@media (aspect-ratio: 16/9)"), "@media (aspect-ratio: 16 / 9)");
    assert_eq!(canonical("@media (resolution: 2)"), "@media (resolution: 2)");
    assert_eq!(canonical("@media (min-width: -10.5em)"), "@media (min-width: -10.5em)");
}

#[test]
fn calc_is_canonicalised() {
    assert_eq!(
        canonical("@media (min-width: calc( 300px  +  2em ))"),
        "@media (min-width: calc(300px + 2em))"
    );
    assert_eq!(
        canonical("@media (min-width: calc((100% - 10px) / 2))"),
        "@media (min-width: calc((100% - 10px) / 2))"
    );
}

#[test]
fn custom_properties_are_rejected() {
    assert!(parse_media_query("@media (min-width: var(--bp))").is_err());
    assert!(parse_media_query("@media (min-width: calc(var(--bp) + 1px))").is_err());
    assert!(parse_media_query("@media (min-width: --bp)").is_err());
    assert!(parse_media_query("@media (--bp: 10px)").is_err());
}

#[test]
fn keywords_ignore_case() {
    assert_eq!(
        canonical("@MEDIA ONLY Screen AND (MIN-WIDTH: 600PX)"),
        "@media only screen and (min-width: 600px)"
    );
}

// === Ranges ===

#[test]
fn strict_inequalities_nudge_the_boundary() {
    assert_eq!(canonical("@media (width > 400px)"), "@media (min-width: 400.01px)");
    assert_eq!(canonical("@media (width < 400px)"), "@media (max-width: 399.99px)");
    assert_eq!(canonical("@media (400px > width)"), "@media (max-width: 399.99px)");
    assert_eq!(canonical("@media (400px < height)"), "@media (min-height: 400.01px)");
}

#[test]
fn inclusive_inequalities_keep_the_boundary() {
    assert_eq!(canonical("@media (width >= 400px)"), "@media (min-width: 400px)");
    assert_eq!(canonical("@media (width<=400px)"), "@media (max-width: 400px)");
    assert_eq!(canonical("@media (400px <= width)"), "@media (min-width: 400px)");
}

#[test]
fn double_inequality_keeps_written_order() {
    let rule = double_inequality().parse_to_end("(1000px >= width >= 700px)");
    assert_eq!(
        rule,
        Ok(MediaQueryRule::And(vec![
            px("max-width", 1000.0),
            px("min-width", 700.0),
        ]))
    );
}

#[test]
fn double_inequality_normalizes_min_first() {
    assert_eq!(
        canonical("@media (400px < width <= 700px)"),
        "@media (min-width: 400.01px) and (max-width: 700px)"
    );
}

#[test]
fn inequality_needs_a_dimension() {
    assert!(inequality().parse_to_end("(width > 400)").is_err());
    assert!(inequality().parse_to_end("(depth > 400px)").is_err());
}

// === Logic ===

#[test]
fn and_chain() {
    assert_eq!(
        canonical("@media screen and (min-width: 600px) and (color)"),
        "@media screen and (min-width: 600px) and (color)"
    );
}

#[test]
fn comma_is_top_level_or() {
    assert_eq!(
        canonical("@media screen and (color),print"),
        "@media screen and (color), print"
    );
}

#[test]
fn and_binds_tighter_than_or() {
    let query = parse_media_query("@media (color) or (grid) and (monochrome)");
    assert_eq!(
        query.map(mq_ir::MediaQuery::into_queries),
        Ok(MediaQueryRule::Or(vec![
            MediaQueryRule::Word(WordFeature::Color),
            MediaQueryRule::And(vec![
                MediaQueryRule::Word(WordFeature::Grid),
                MediaQueryRule::Word(WordFeature::Monochrome),
            ]),
        ]))
    );
}

#[test]
fn nested_groups() {
    assert_eq!(
        canonical("@media (color) and ((grid) or (monochrome))"),
        "@media (color) and ((grid) or (monochrome))"
    );
    assert_eq!(canonical("@media ((color))"), "@media (color)");
}

#[test]
fn nested_or_joins_the_comma_list() {
    assert_eq!(
        canonical("@media (color) or ((grid) or (monochrome))"),
        "@media (color), (grid), (monochrome)"
    );
}

#[test]
fn not_condition() {
    assert_eq!(canonical("@media (not (color))"), "@media (not (color))");
    assert_eq!(
        canonical("@media (not (color) and (grid))"),
        "@media (not ((color) and (grid)))"
    );
    assert_eq!(canonical("@media (not (not (color)))"), "@media (color)");
}

#[test]
fn not_prefixed_query_set() {
    assert_eq!(
        canonical("@media not (color) and (grid)"),
        "@media (not ((color) and (grid)))"
    );
    assert_eq!(
        parse_media_query("@media not screen").map(mq_ir::MediaQuery::into_queries),
        Ok(MediaQueryRule::Keyword {
            key: MediaType::Screen,
            not: true,
            only: false,
        })
    );
}

#[test]
fn negated_bound_merges_with_siblings() {
    assert_eq!(
        canonical("@media (max-width: 1024px) and (not (max-width: 768px))"),
        "@media (min-width: 768.01px) and (max-width: 1024px)"
    );
}

#[test]
fn negated_range_becomes_disjoint_union() {
    assert_eq!(
        canonical(
            "@media (max-width: 1200px) and (not ((min-width: 768px) and (max-width: 1024px)))"
        ),
        "@media (max-width: 767.99px), (min-width: 1024.01px) and (max-width: 1200px)"
    );
}

#[test]
fn contradictory_ranges_match_nothing() {
    assert_eq!(
        canonical("@media (min-width: 600px) and (max-width: 400px)"),
        "@media not all"
    );
}

#[test]
fn media_types_inside_groups() {
    assert_eq!(canonical("@media (screen)"), "@media screen");
    assert_eq!(
        canonical("@media (max-width: 1000px) and (not (screen and (min-width: 500px) and (color)))"),
        "@media (max-width: 1000px) and (not (screen and (min-width: 500px) and (color)))"
    );
    assert_eq!(
        canonical("@media (color) and (not (print or screen))"),
        "@media (color) and (not (print or screen))"
    );
    assert_eq!(canonical("@media (color) and (not print)"), "@media (color) and not print");
    assert_eq!(
        canonical("@media (color) and ((not print) or (grid))"),
        "@media (color) and ((not print) or (grid))"
    );
}

// === Failures ===

#[test]
fn connectives_need_operands() {
    assert!(parse_media_query("@media and (min-width: 600px)").is_err());
    assert!(parse_media_query("@media (color) and").is_err());
    assert!(parse_media_query("@media (color),").is_err());
    assert!(parse_media_query("@media").is_err());
}

#[test]
fn trailing_text_is_reported() {
    assert_eq!(
        parse_media_query("@media (color) garbage"),
        Err(ParseError::TrailingInput {
            consumed: "@media (color) ".to_owned(),
            trailing: "garbage".to_owned(),
        })
    );
}

#[test]
fn missing_at_rule_is_reported() {
    assert_eq!(
        parse_media_query("screen"),
        Err(ParseError::Unexpected {
            expected: "`@media`".to_owned(),
            consumed: String::new(),
        })
    );
}

#[test]
fn surrounding_whitespace_is_allowed() {
    assert_eq!(canonical("  @media   (color)  "), "@media (color)");
}

#[test]
fn collapse_keeps_lone_rule() {
    let grid = MediaQueryRule::Word(WordFeature::Grid);
    assert_eq!(collapse(vec![grid.clone()], MediaQueryRule::Or), grid);
    assert_eq!(
        collapse(vec![grid.clone(), grid.clone()], MediaQueryRule::And),
        MediaQueryRule::And(vec![grid.clone(), grid])
    );
}
