//! Parse failures and public parse errors.
//!
//! [`ParseFailure`] is the value combinators return to signal "this branch
//! did not match"; it drives backtracking and never reaches callers.
//! [`ParseError`] is what [`Parser::parse_to_end`](crate::Parser::parse_to_end)
//! reports, and [`MediaQueryError`] is the fixed-message error of
//! [`validate_media_query`](crate::validate_media_query).

use std::rc::Rc;
use thiserror::Error;

/// A parser did not match at `position`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {label} at token {position}")]
pub struct ParseFailure {
    /// Label of the parser that failed.
    pub label: Rc<str>,
    /// Cursor position the parser started at.
    pub position: usize,
}

impl ParseFailure {
    pub fn new(label: impl Into<Rc<str>>, position: usize) -> Self {
        ParseFailure {
            label: label.into(),
            position,
        }
    }
}

/// A parse over a whole source string failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No alternative matched.
    #[error("expected {expected} after `{consumed}`")]
    Unexpected {
        /// Label of the outermost failing parser.
        expected: String,
        /// Raw source up to the furthest token any attempt consumed.
        consumed: String,
    },
    /// The parser matched a prefix but input remains.
    #[error("unexpected `{trailing}` after `{consumed}`")]
    TrailingInput { consumed: String, trailing: String },
}

/// Error returned by [`validate_media_query`](crate::validate_media_query).
///
/// Messages are fixed strings; callers match on them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MediaQueryError {
    #[error("SYNTAX_ERROR")]
    SyntaxError,
    #[error("UNBALANCED_PARENS")]
    UnbalancedParens,
}
