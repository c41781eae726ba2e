//! Backtracking parser combinators over a [`TokenCursor`].
//!
//! A [`Parser`] is a labelled, cheaply clonable closure. Failure is a plain
//! [`ParseFailure`] value, and a failing parser always leaves the cursor
//! where it found it, so alternatives can be tried without lookahead.
//!
//! # Combinators
//!
//! | Combinator | On failure |
//! |------------|------------|
//! | [`Parser::map`] | Propagates the inner failure |
//! | [`Parser::flat_map`] | Rewinds past both stages |
//! | [`Parser::or`] | Tries the alternative, reports its failure |
//! | [`Parser::optional`] | Never fails |
//! | [`Parser::filter`] | Fails with the filter's label |
//! | [`Series`] | Stops at the first failed attempt, rewinding only that attempt |
//! | [`Sequence`] | Rewinds the whole sequence |
//!
//! There is no memoization: a pathological grammar can backtrack
//! exponentially. Media queries are short and shallow enough that this does
//! not matter in practice.

use crate::error::{ParseError, ParseFailure};
use mq_lexer::TokenCursor;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

type ParseFn<T> = dyn Fn(&mut TokenCursor<'_>) -> Result<T, ParseFailure>;

/// A labelled parser producing `T`.
pub struct Parser<T> {
    label: Rc<str>,
    run: Rc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            label: Rc::clone(&self.label),
            run: Rc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").field("label", &self.label).finish()
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a parse function.
    ///
    /// `run` may leave the cursor anywhere when it fails;
    /// [`Parser::parse`] restores it.
    pub fn new<F>(label: impl Into<Rc<str>>, run: F) -> Self
    where
        F: Fn(&mut TokenCursor<'_>) -> Result<T, ParseFailure> + 'static,
    {
        Parser {
            label: label.into(),
            run: Rc::new(run),
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the parser, rewinding the cursor if it fails.
    pub fn parse(&self, cursor: &mut TokenCursor<'_>) -> Result<T, ParseFailure> {
        let start = cursor.position();
        let result = (self.run)(cursor);
        if result.is_err() {
            cursor.set_position(start);
        }
        result
    }

    /// Parse all of `source`.
    ///
    /// Fails with [`ParseError::TrailingInput`] if the parser matches only a
    /// prefix. On a mismatch, the error quotes the source up to the furthest
    /// token any alternative reached.
    pub fn parse_to_end(&self, source: &str) -> Result<T, ParseError> {
        let mut cursor = TokenCursor::new(source);
        match self.parse(&mut cursor) {
            Ok(value) if cursor.is_empty() => Ok(value),
            Ok(_) => {
                let position = cursor.position();
                trace!(position, label = %self.label, "trailing input");
                Err(ParseError::TrailingInput {
                    consumed: cursor.source_before(position).to_owned(),
                    trailing: cursor.source_from(position).to_owned(),
                })
            }
            Err(failure) => {
                trace!(position = failure.position, label = %failure.label, "parse failed");
                Err(ParseError::Unexpected {
                    expected: failure.label.to_string(),
                    consumed: cursor.source_before(cursor.furthest_position()).to_owned(),
                })
            }
        }
    }

    /// Rename the parser. Failures report the new label.
    #[must_use]
    pub fn labelled(self, label: impl Into<Rc<str>>) -> Self {
        let label: Rc<str> = label.into();
        let reported = Rc::clone(&label);
        Parser::new(label, move |cursor| {
            let start = cursor.position();
            self.parse(cursor)
                .map_err(|_| ParseFailure::new(Rc::clone(&reported), start))
        })
    }

    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Parser<U> {
        let label = Rc::clone(&self.label);
        Parser::new(label, move |cursor| self.parse(cursor).map(&f))
    }

    /// Run the parser `f` builds from this parser's result.
    pub fn flat_map<U: 'static>(self, f: impl Fn(T) -> Parser<U> + 'static) -> Parser<U> {
        let label = Rc::clone(&self.label);
        Parser::new(label, move |cursor| {
            let value = self.parse(cursor)?;
            f(value).parse(cursor)
        })
    }

    #[must_use]
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        let label = format!("{} or {}", self.label, other.label);
        Parser::new(label, move |cursor| {
            self.parse(cursor).or_else(|_| other.parse(cursor))
        })
    }

    /// First alternative that matches.
    ///
    /// Unlike a chain of [`Parser::or`], a total failure reports the label
    /// of the whole choice rather than of the last alternative.
    pub fn one_of(alternatives: Vec<Parser<T>>) -> Parser<T> {
        let label: Rc<str> = alternatives
            .iter()
            .map(Parser::label)
            .collect::<Vec<_>>()
            .join(" or ")
            .into();
        let reported = Rc::clone(&label);
        Parser::new(label, move |cursor| {
            let start = cursor.position();
            for alternative in &alternatives {
                if let Ok(value) = alternative.parse(cursor) {
                    return Ok(value);
                }
            }
            Err(ParseFailure::new(Rc::clone(&reported), start))
        })
    }

    pub fn optional(self) -> Parser<Option<T>> {
        let label = format!("optional {}", self.label);
        Parser::new(label, move |cursor| Ok(self.parse(cursor).ok()))
    }

    /// Keep only results satisfying `predicate`.
    #[must_use]
    pub fn filter(
        self,
        label: impl Into<Rc<str>>,
        predicate: impl Fn(&T) -> bool + 'static,
    ) -> Parser<T> {
        let label: Rc<str> = label.into();
        let reported = Rc::clone(&label);
        Parser::new(label, move |cursor| {
            let start = cursor.position();
            let value = self.parse(cursor)?;
            if predicate(&value) {
                Ok(value)
            } else {
                Err(ParseFailure::new(Rc::clone(&reported), start))
            }
        })
    }

    /// Run `next` after this parser and keep both results.
    pub fn then<U: 'static>(self, next: Parser<U>) -> Parser<(T, U)> {
        let label = Rc::clone(&self.label);
        Parser::new(label, move |cursor| {
            let first = self.parse(cursor)?;
            let second = next.parse(cursor)?;
            Ok((first, second))
        })
    }

    /// Run `next` after this parser and discard its result.
    #[must_use]
    pub fn skip<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        self.then(next).map(|(value, _)| value)
    }

    /// Run `prefix` first and discard its result.
    #[must_use]
    pub fn prefixed_by<U: 'static>(self, prefix: Parser<U>) -> Parser<T> {
        let label = Rc::clone(&self.label);
        Parser::new(label, move |cursor| {
            prefix.parse(cursor)?;
            self.parse(cursor)
        })
    }

    #[must_use]
    pub fn surrounded_by<A: 'static, B: 'static>(self, open: Parser<A>, close: Parser<B>) -> Parser<T> {
        self.prefixed_by(open).skip(close)
    }

    pub fn zero_or_more(self) -> Series<T> {
        Series::new(self, 0)
    }

    pub fn one_or_more(self) -> Series<T> {
        Series::new(self, 1)
    }

    /// Defer construction of a parser until it first runs.
    ///
    /// Lets mutually recursive rules refer to each other: each rule builds
    /// its own parser tree, and a `lazy` node stands in for the recursive
    /// reference until input actually nests that deep.
    pub fn lazy(label: impl Into<Rc<str>>, build: impl Fn() -> Parser<T> + 'static) -> Parser<T> {
        let target: OnceCell<Parser<T>> = OnceCell::new();
        Parser::new(label, move |cursor| target.get_or_init(&build).parse(cursor))
    }
}

impl<T: Clone + 'static> Parser<T> {
    /// Succeed with `value` without consuming input.
    pub fn always(value: T) -> Self {
        Parser::new("nothing", move |_| Ok(value.clone()))
    }
}

/// Greedy repetition, built by [`Parser::zero_or_more`] and
/// [`Parser::one_or_more`].
pub struct Series<T> {
    item: Parser<T>,
    separator: Option<Parser<()>>,
    min_count: usize,
}

impl<T: 'static> Series<T> {
    fn new(item: Parser<T>, min_count: usize) -> Self {
        Series {
            item,
            separator: None,
            min_count,
        }
    }

    /// Require `separator` between consecutive items.
    #[must_use]
    pub fn separated_by<S: 'static>(mut self, separator: Parser<S>) -> Self {
        self.separator = Some(separator.map(|_| ()));
        self
    }

    pub fn into_parser(self) -> Parser<Vec<T>> {
        let Series {
            item,
            separator,
            min_count,
        } = self;
        let label = if min_count == 0 {
            format!("zero or more {}", item.label)
        } else {
            format!("one or more {}", item.label)
        };
        Parser::new(label, move |cursor| {
            let mut items = Vec::new();
            let mut failure = None;
            loop {
                let checkpoint = cursor.position();
                if let (Some(separator), false) = (&separator, items.is_empty()) {
                    if let Err(err) = separator.parse(cursor) {
                        failure = Some(err);
                        break;
                    }
                }
                match item.parse(cursor) {
                    Ok(value) => {
                        items.push(value);
                        // Zero-width item: another round would loop forever.
                        if cursor.position() == checkpoint {
                            break;
                        }
                    }
                    Err(err) => {
                        cursor.set_position(checkpoint);
                        failure = Some(err);
                        break;
                    }
                }
            }
            if items.len() < min_count {
                return Err(failure
                    .unwrap_or_else(|| ParseFailure::new(Rc::clone(&item.label), cursor.position())));
            }
            Ok(items)
        })
    }
}

impl<T: 'static> From<Series<T>> for Parser<Vec<T>> {
    fn from(series: Series<T>) -> Self {
        series.into_parser()
    }
}

/// Fixed sequence of parsers, built by [`sequence`].
pub struct Sequence<T> {
    parsers: Vec<Parser<T>>,
    separator: Option<Parser<()>>,
}

/// Run every parser in order; any failure fails the whole sequence.
pub fn sequence<T: 'static>(parsers: Vec<Parser<T>>) -> Sequence<T> {
    Sequence {
        parsers,
        separator: None,
    }
}

impl<T: 'static> Sequence<T> {
    /// Require `separator` between consecutive elements.
    #[must_use]
    pub fn separated_by<S: 'static>(mut self, separator: Parser<S>) -> Self {
        self.separator = Some(separator.map(|_| ()));
        self
    }

    pub fn into_parser(self) -> Parser<Vec<T>> {
        let Sequence { parsers, separator } = self;
        let label = parsers
            .iter()
            .map(Parser::label)
            .collect::<Vec<_>>()
            .join(" ");
        Parser::new(label, move |cursor| {
            let mut values = Vec::with_capacity(parsers.len());
            for (index, parser) in parsers.iter().enumerate() {
                if let (Some(separator), true) = (&separator, index > 0) {
                    separator.parse(cursor)?;
                }
                values.push(parser.parse(cursor)?);
            }
            Ok(values)
        })
    }
}

impl<T: 'static> From<Sequence<T>> for Parser<Vec<T>> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_parser()
    }
}
