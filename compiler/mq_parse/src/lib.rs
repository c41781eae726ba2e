//! Media query parser.
//!
//! A small backtracking parser-combinator library ([`Parser`] and the
//! token-level parsers in [`primitives`]) and the `@media` grammar built on
//! it. [`parse_media_query`] is the main entry point; [`validate_media_query`]
//! wraps it with a parenthesis pre-check and fixed error messages.
//!
//! ```text
//! "@media (width > 400px)"  ->  Pair { min-width, 400.01px }
//! ```

mod combinator;
mod error;
mod grammar;
pub mod primitives;

pub use combinator::{sequence, Parser, Sequence, Series};
pub use error::{MediaQueryError, ParseError, ParseFailure};
pub use grammar::media_query;

use mq_ir::MediaQuery;
use tracing::debug;

thread_local! {
    static MEDIA_QUERY: Parser<MediaQuery> = media_query();
}

/// Parse an `@media ...` header into its normal form.
///
/// The whole string must match; leading and trailing whitespace is allowed.
pub fn parse_media_query(raw: &str) -> Result<MediaQuery, ParseError> {
    let result = MEDIA_QUERY.with(|parser| parser.parse_to_end(raw));
    match &result {
        Ok(query) => debug!(raw, %query, "parsed media query"),
        Err(error) => debug!(raw, %error, "media query did not parse"),
    }
    result
}

/// Like [`parse_media_query`], but with stable error messages.
///
/// Unbalanced parentheses are reported as
/// [`MediaQueryError::UnbalancedParens`] before the grammar runs; every other
/// failure is [`MediaQueryError::SyntaxError`].
pub fn validate_media_query(raw: &str) -> Result<MediaQuery, MediaQueryError> {
    if !has_balanced_parens(raw) {
        debug!(raw, "unbalanced parentheses");
        return Err(MediaQueryError::UnbalancedParens);
    }
    parse_media_query(raw).map_err(|_| MediaQueryError::SyntaxError)
}

fn has_balanced_parens(raw: &str) -> bool {
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(outer) => depth = outer,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests;
