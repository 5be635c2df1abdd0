//! Token cursor for navigating the token stream.

use crate::ParseError;
use seek_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor over a `TokenList`.
///
/// Invariant: the position is always in `0..tokens.len()`, and the last
/// token is `Eof`, so `current()` never runs off the end.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Get the current token. Past-the-end reads return the final `Eof`.
    #[inline]
    pub fn current(&self) -> Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.token_at(self.pos - 1).span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.token_at(self.pos + 1).kind
    }

    /// Kind of the first token at or after the cursor that is not `;` or a
    /// newline. Does not move the cursor.
    pub fn peek_past_terminators(&self) -> TokenKind {
        (self.pos..self.tokens.len())
            .map(|i| self.tokens[i].kind)
            .find(|kind| !kind.is_terminator())
            .unwrap_or(TokenKind::Eof)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_terminator(&self) -> bool {
        self.current_kind().is_terminator()
    }

    /// Consume the current token and return it. Never moves past `Eof`.
    pub fn advance(&mut self) -> Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.describe(),
            span_start = token.span.start,
            "advance"
        );
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Skip any run of `;` and newline tokens.
    pub fn skip_terminators(&mut self) {
        while self.check_terminator() {
            self.advance();
        }
    }

    /// Consume a token of the given kind or fail with `expected`.
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(self.current(), expected))
        }
    }

    fn token_at(&self, pos: usize) -> Token {
        let last = self.tokens.len().saturating_sub(1);
        match self.tokens.as_slice().get(pos.min(last)) {
            Some(token) => *token,
            None => Token::new(TokenKind::Eof, Span::DUMMY),
        }
    }
}
