//! Command handlers.

use mq_lexer::tokenize;
use mq_parse::{parse_media_query, validate_media_query, MediaQueryError, ParseError};
use mq_transform::{last_media_query_wins_transform, TransformError};
use serde_json::Value;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

pub const USAGE: &str = "\
Usage: mqc <command> [arguments]

Commands:
  lex <query>                    Print the token stream of a query
  parse <query>                  Print the normalized query and its rule tree
  validate <query>               Print the normalized query, or SYNTAX_ERROR /
                                 UNBALANCED_PARENS
  transform <file.json|-> [--pretty]
                                 Make sibling @media keys mutually exclusive";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validate(#[from] MediaQueryError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Run a command. `args` excludes the program name; `stdin` is read when the
/// transform input is `-`.
pub fn run(args: &[String], stdin: &mut impl Read) -> Result<String, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage(USAGE.to_owned()));
    };
    debug!(command = command.as_str(), "running command");
    match (command.as_str(), rest) {
        ("lex", [query]) => Ok(lex(query)),
        ("parse", [query]) => parse(query),
        ("validate", [query]) => Ok(validate_media_query(query)?.to_string()),
        ("transform", rest) => transform(rest, stdin),
        ("help" | "--help" | "-h", _) => Ok(USAGE.to_owned()),
        (command, _) => Err(CliError::Usage(format!(
            "unknown or incomplete command `{command}`\n\n{USAGE}"
        ))),
    }
}

fn lex(query: &str) -> String {
    let tokens = tokenize(query);
    let listing: String = tokens
        .iter()
        .map(|token| format!("\n  {:?} @ {:?}", token.kind, token.span.to_range()))
        .collect();
    format!("Tokens for '{query}' ({} tokens):{listing}", tokens.len())
}

fn parse(query: &str) -> Result<String, CliError> {
    let parsed = parse_media_query(query)?;
    Ok(format!("{parsed}\n{:#?}", parsed.queries()))
}

fn transform(args: &[String], stdin: &mut impl Read) -> Result<String, CliError> {
    let mut path = None;
    let mut pretty = false;
    for arg in args {
        if arg == "--pretty" {
            pretty = true;
        } else if path.is_none() {
            path = Some(arg.as_str());
        } else {
            return Err(CliError::Usage(format!("unexpected argument `{arg}`\n\n{USAGE}")));
        }
    }
    let Some(path) = path else {
        return Err(CliError::Usage(format!("missing input file\n\n{USAGE}")));
    };

    let source = read_input(path, stdin)?;
    let styles: Value = serde_json::from_str(&source)?;
    let transformed = last_media_query_wins_transform(&styles)?;
    let output = if pretty {
        serde_json::to_string_pretty(&transformed)?
    } else {
        serde_json::to_string(&transformed)?
    };
    Ok(output)
}

fn read_input(path: &str, stdin: &mut impl Read) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_owned(),
        source,
    };
    if path == "-" {
        let mut source = String::new();
        stdin.read_to_string(&mut source).map_err(read_error)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}

#[cfg(test)]
mod tests;
