//! Statement and block parsing.
//!
//! ```text
//! program   = { terminator } { stmt terminators }
//! stmt      = IDENT "=" expr
//!           | "if" expr "do" block ( "else" block "end" | "end" [ "else" block "end" ] )
//!           | "for" expr "do" block "end"
//!           | "up" | "down" | "left" | "right"
//! block     = { terminator } { stmt terminators }
//! terminator = ";" | NEWLINE
//! ```
//!
//! A statement must be followed by a terminator unless the next token is
//! `end`, `else` or end of input. Runs of terminators collapse.
//!
//! The `end else` form is only taken when no enclosing `if` then-block can
//! own the `else`: inside a then-block, `if a do if b do x end else y end`
//! gives `else y` to the outer `if`.

use seek_ir::{Span, Stmt, StmtId, StmtKind, StmtRange, TokenKind};
use tracing::debug;

use crate::stack::ensure_sufficient_stack;
use crate::{BlockOpener, ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse statements until end of input.
    pub(crate) fn parse_top_level(&mut self) -> Result<StmtRange, ParseError> {
        let mut stmts = Vec::new();
        loop {
            self.cursor.skip_terminators();
            if self.cursor.is_at_end() {
                break;
            }
            stmts.push(self.parse_stmt()?);
        }
        Ok(self.arena.alloc_block(&stmts))
    }

    /// Parse statements up to (not including) `end` or `else`.
    ///
    /// Reaching end of input first is an unclosed block, reported at the
    /// end of input with a secondary label on the opening keyword.
    /// `then_block` is set for the then-block of an `if`.
    fn parse_block(
        &mut self,
        opener: BlockOpener,
        opened_at: Span,
        then_block: bool,
    ) -> Result<StmtRange, ParseError> {
        let outer = std::mem::replace(&mut self.in_then_block, then_block);
        let block = self.parse_block_stmts(opener, opened_at);
        self.in_then_block = outer;
        block
    }

    fn parse_block_stmts(
        &mut self,
        opener: BlockOpener,
        opened_at: Span,
    ) -> Result<StmtRange, ParseError> {
        let mut stmts = Vec::new();
        loop {
            self.cursor.skip_terminators();
            match self.current_kind() {
                TokenKind::End | TokenKind::Else => break,
                TokenKind::Eof => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnclosedBlock { opener, opened_at },
                        self.current_span(),
                    ));
                }
                _ => stmts.push(self.parse_stmt()?),
            }
        }
        Ok(self.arena.alloc_block(&stmts))
    }

    /// Parse one statement and check what follows it.
    fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.current_span();
        let kind = ensure_sufficient_stack(|| self.parse_stmt_kind())?;
        let span = start.merge(self.previous_span());
        self.expect_stmt_end()?;
        Ok(self.arena.alloc_stmt(Stmt::new(kind, span)))
    }

    fn parse_stmt_kind(&mut self) -> Result<StmtKind, ParseError> {
        let token = self.current();
        if let Some(direction) = token.kind.direction() {
            self.advance();
            debug!(%direction, "movement statement");
            return Ok(StmtKind::Move(direction));
        }

        match token.kind {
            TokenKind::Ident(target) => {
                self.in_error_context(ErrorContext::Assignment, |p| {
                    p.advance();
                    p.expect(TokenKind::Eq, "`=` after the variable name")?;
                    let value = p.parse_expr()?;
                    debug!(target = p.cursor.interner().lookup(target), "assignment");
                    Ok(StmtKind::Assign { target, value })
                })
            }
            TokenKind::MovementList if self.cursor.peek_next_kind() == TokenKind::Eq => Err(
                ParseError::new(ParseErrorKind::AssignToMovementList, token.span)
                    .or_context(ErrorContext::Assignment),
            ),
            TokenKind::If => self.in_error_context(ErrorContext::IfStatement, Self::parse_if),
            TokenKind::For => self.in_error_context(ErrorContext::ForLoop, Self::parse_for),
            found => Err(ParseError::new(
                ParseErrorKind::ExpectedStatement { found },
                token.span,
            )),
        }
    }

    /// `if cond do A [else B] end`, also accepting `if cond do A end else B end`.
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        let if_span = self.advance().span;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Do, "`do` after the condition")?;
        let then_block = self.parse_block(BlockOpener::If, if_span, true)?;

        let else_block = if self.check(TokenKind::Else) {
            let else_span = self.advance().span;
            let block = self.parse_block(BlockOpener::If, else_span, false)?;
            self.expect_block_end()?;
            Some(block)
        } else {
            self.expect_block_end()?;
            if !self.in_then_block && self.cursor.peek_past_terminators() == TokenKind::Else {
                self.cursor.skip_terminators();
                let else_span = self.advance().span;
                let block = self.parse_block(BlockOpener::If, else_span, false)?;
                self.expect_block_end()?;
                Some(block)
            } else {
                None
            }
        };

        Ok(StmtKind::If {
            cond,
            then_block,
            else_block,
        })
    }

    /// `for count do body end`
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        let for_span = self.advance().span;
        let count = self.parse_expr()?;
        self.expect(TokenKind::Do, "`do` after the loop count")?;
        let body = self.parse_block(BlockOpener::For, for_span, false)?;
        self.expect_block_end()?;
        Ok(StmtKind::For { count, body })
    }

    fn expect_block_end(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::End, "`end`").map(|_| ())
    }

    /// A statement ends at a terminator (consumed), or just before `end`,
    /// `else` or end of input (not consumed).
    fn expect_stmt_end(&mut self) -> Result<(), ParseError> {
        match self.current_kind() {
            kind if kind.is_terminator() => {
                self.advance();
                Ok(())
            }
            TokenKind::End | TokenKind::Else | TokenKind::Eof => Ok(()),
            found => Err(ParseError::new(
                ParseErrorKind::MissingTerminator { found },
                self.current_span(),
            )),
        }
    }
}
