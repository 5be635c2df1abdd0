//! Recursive descent parser for seek_lang.
//!
//! Produces a flat [`Program`] (arena plus top-level block). Parsing stops at
//! the first error; no partial program is returned.

mod cursor;
mod error;
mod grammar;
mod stack;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::{BlockOpener, ErrorContext, ParseError, ParseErrorKind};

use seek_ir::{ExprArena, Program, Span, StringInterner, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    /// Set while parsing the then-block of an `if`. An `else` after a
    /// nested `if ... end` then belongs to the enclosing `if`.
    in_then_block: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len()),
            in_then_block: false,
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        self.cursor.expect(kind, expected)
    }

    /// Run `f`, tagging any error it returns with `context`.
    ///
    /// Inner contexts win: an error inside a parenthesized expression inside
    /// a for loop reports the parenthesized expression.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        f(self).map_err(|e| e.or_context(context))
    }

    /// Parse the whole token stream into a program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let body = self.parse_top_level()?;
        tracing::debug!(
            statements = body.len(),
            exprs = self.arena.expr_count(),
            "parsed program"
        );
        Ok(Program::new(self.arena, body))
    }
}

/// Parse tokens into a program.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<Program, ParseError> {
    Parser::new(tokens, interner).parse_program()
}
