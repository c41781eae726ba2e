use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_owned()).collect()
}

fn run_args(list: &[&str]) -> Result<String, CliError> {
    run(&args(list), &mut std::io::empty())
}

#[test]
fn no_arguments_prints_usage() {
    let Err(CliError::Usage(usage)) = run_args(&[]) else {
        panic!("expected usage error");
    };
    assert_eq!(usage, USAGE);
}

#[test]
fn unknown_command_is_a_usage_error() {
    assert!(matches!(run_args(&["frobnicate"]), Err(CliError::Usage(_))));
    assert!(matches!(run_args(&["parse"]), Err(CliError::Usage(_))));
}

#[test]
fn lex_lists_tokens() {
    let output = run_args(&["lex", "(color)"]).unwrap_or_default();
    assert_eq!(
        output,
        "Tokens for '(color)' (4 tokens):\n  \
         LParen @ 0..1\n  \
         Ident(\"color\") @ 1..6\n  \
         RParen @ 6..7\n  \
         Eof @ 7..7"
    );
}

#[test]
fn parse_prints_canonical_form() {
    let output = run_args(&["parse", "@media (width > 400px)"]).unwrap_or_default();
    assert!(output.starts_with("@media (min-width: 400.01px)\n"));
    assert!(output.contains("min-width"));
}

#[test]
fn parse_reports_errors() {
    assert!(matches!(
        run_args(&["parse", "@media (color"]),
        Err(CliError::Parse(_))
    ));
}

#[test]
fn validate_uses_fixed_messages() {
    let unbalanced = run_args(&["validate", "@media (width: 600px"]);
    assert_eq!(
        unbalanced.map_err(|error| error.to_string()),
        Err("UNBALANCED_PARENS".to_owned())
    );
    let syntax = run_args(&["validate", "@media and (min-width: 600px)"]);
    assert_eq!(
        syntax.map_err(|error| error.to_string()),
        Err("SYNTAX_ERROR".to_owned())
    );
    assert_eq!(
        run_args(&["validate", "@media screen"]).map_err(|error| error.to_string()),
        Ok("@media screen".to_owned())
    );
}

#[test]
fn transform_reads_stdin() {
    let input = r#"{"a":{"@media (max-width: 1024px)":1,"@media (max-width: 768px)":2}}"#;
    let output = run(&args(&["transform", "-"]), &mut input.as_bytes());
    assert_eq!(
        output.map_err(|error| error.to_string()),
        Ok(r#"{"a":{"@media (min-width: 768.01px) and (max-width: 1024px)":1,"@media (max-width: 768px)":2}}"#.to_owned())
    );
}

#[test]
fn transform_pretty_prints() {
    let input = r#"{"a":{"default":1}}"#;
    let output = run(&args(&["transform", "--pretty", "-"]), &mut input.as_bytes());
    assert_eq!(
        output.map_err(|error| error.to_string()),
        Ok("{\n  \"a\": {\n    \"default\": 1\n  }\n}".to_owned())
    );
}

#[test]
fn transform_reports_bad_input() {
    let output = run(&args(&["transform", "-"]), &mut "{".as_bytes());
    assert!(matches!(output, Err(CliError::Json(_))));

    let missing = run_args(&["transform", "/nonexistent/styles.json"]);
    assert!(matches!(missing, Err(CliError::Read { .. })));

    assert!(matches!(run_args(&["transform"]), Err(CliError::Usage(_))));
    assert!(matches!(
        run_args(&["transform", "a.json", "b.json"]),
        Err(CliError::Usage(_))
    ));
}

#[test]
fn transform_reports_invalid_queries() {
    let input = r#"{"a":{"@media nonsense(":1}}"#;
    let output = run(&args(&["transform", "-"]), &mut input.as_bytes());
    assert!(matches!(output, Err(CliError::Transform(_))));
}
