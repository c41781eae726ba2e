//! Backtrackable token cursor.
//!
//! Lexes on demand and caches every token it produces, so rewinding with
//! [`TokenCursor::set_position`] never re-runs the lexer. The cursor never
//! yields `Eof`: [`TokenCursor::peek`] returns `None` at end of input.

use crate::{push_lexed, RawToken, Token};
use logos::Logos;

/// Cursor over a lazily lexed token stream.
pub struct TokenCursor<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, RawToken>,
    tokens: Vec<Token>,
    pos: usize,
    /// Highest position ever reached, for diagnostics after backtracking.
    furthest: usize,
    exhausted: bool,
}

impl<'src> TokenCursor<'src> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        TokenCursor {
            source,
            lexer: RawToken::lexer(source),
            tokens: Vec::new(),
            pos: 0,
            furthest: 0,
            exhausted: false,
        }
    }

    /// Get the current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used to roll back after a failed speculative parse. The position must
    /// have been observed through [`TokenCursor::position`] on this cursor.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
    }

    /// Highest position any parse attempt has reached.
    pub fn furthest_position(&self) -> usize {
        self.furthest
    }

    /// Number of tokens lexed so far.
    pub fn lexed_count(&self) -> usize {
        self.tokens.len()
    }

    /// Look at the current token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.fill(self.pos) {
            self.tokens.get(self.pos)
        } else {
            None
        }
    }

    /// Consume the current token and advance.
    pub fn consume(&mut self) -> Option<&Token> {
        if !self.fill(self.pos) {
            return None;
        }
        self.pos += 1;
        self.furthest = self.furthest.max(self.pos);
        self.tokens.get(self.pos - 1)
    }

    /// Check if at end of input.
    pub fn is_empty(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Raw source text covered by the tokens before `position`.
    pub fn source_before(&self, position: usize) -> &'src str {
        let end = position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .map_or(0, |token| token.span.end as usize);
        self.source.get(..end).unwrap_or(self.source)
    }

    /// Raw source text from the token at `position` to the end of input.
    pub fn source_from(&mut self, position: usize) -> &'src str {
        let start = if self.fill(position) {
            self.tokens
                .get(position)
                .map_or(self.source.len(), |token| token.span.start as usize)
        } else {
            self.source.len()
        };
        self.source.get(start..).unwrap_or("")
    }

    /// Lex until a token exists at `index`. Returns `false` at end of input.
    fn fill(&mut self, index: usize) -> bool {
        while self.tokens.len() <= index {
            if self.exhausted {
                return false;
            }
            match self.lexer.next() {
                Some(result) => {
                    push_lexed(result, self.lexer.span(), self.lexer.slice(), &mut self.tokens);
                }
                None => self.exhausted = true,
            }
        }
        true
    }
}
