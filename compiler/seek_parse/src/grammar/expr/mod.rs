//! Expression parsing.
//!
//! Precedence, lowest to highest:
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | 1 | `or` | left |
//! | 2 | `and` | left |
//! | 3 | `not` | prefix |
//! | 4 | `==` `!=` | left |
//! | 5 | `<` `<=` `>` `>=` | left |
//! | 6 | `+` `-` | left |
//! | 7 | `*` `/` | left |
//! | 8 | unary `-` | prefix |
//! | 9 | literal, identifier, `( expr )` | |

mod operators;

use seek_ir::{BinaryOp, Expr, ExprId, ExprKind, LogicalOp, Span, TokenKind, UnaryOp};
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.arena.get_expr(id).span
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    fn alloc_logical(&mut self, op: LogicalOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Logical { op, left, right }, span))
    }

    fn alloc_unary(&mut self, op: UnaryOp, op_span: Span, operand: ExprId) -> ExprId {
        let span = op_span.merge(self.span_of(operand));
        self.arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span))
    }

    /// Parse `or`
    fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_and()?;
        while self.check(TokenKind::Or) {
            self.advance();
            let right = self.parse_and()?;
            left = self.alloc_logical(LogicalOp::Or, left, right);
        }
        Ok(left)
    }

    /// Parse `and`
    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_not()?;
        while self.check(TokenKind::And) {
            self.advance();
            let right = self.parse_not()?;
            left = self.alloc_logical(LogicalOp::And, left, right);
        }
        Ok(left)
    }

    /// Parse prefix `not`. Binds looser than comparisons, so
    /// `not a == b` is `not (a == b)`.
    fn parse_not(&mut self) -> Result<ExprId, ParseError> {
        if self.check(TokenKind::Not) {
            let op_span = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_not())?;
            return Ok(self.alloc_unary(UnaryOp::Not, op_span, operand));
        }
        self.parse_equality()
    }

    /// Parse `==` `!=`
    fn parse_equality(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_comparison()?;
        while let Some(op) = self.match_equality_op() {
            self.advance();
            let right = self.parse_comparison()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// Parse `<` `<=` `>` `>=`
    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.match_comparison_op() {
            self.advance();
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// Parse `+` `-`
    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// Parse `*` `/`
    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_unary()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// Parse unary `-`
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        if self.check(TokenKind::Minus) {
            let op_span = self.advance().span;
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(self.alloc_unary(UnaryOp::Neg, op_span, operand));
        }
        self.parse_primary()
    }

    /// Parse literals, identifiers and parenthesized expressions.
    fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.current();
        trace!(kind = %token.kind.describe(), "parse_primary");

        if let Some(direction) = token.kind.direction() {
            return Err(ParseError::new(
                ParseErrorKind::MovementAsValue { direction },
                token.span,
            ));
        }

        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => {
                return self.in_error_context(ErrorContext::Parenthesized, |p| {
                    let open = p.advance().span;
                    let inner = p.parse_expr()?;
                    let close = p.expect(TokenKind::RParen, "`)`")?.span;
                    // Re-span the group to include both parentheses.
                    let mut expr = *p.arena.get_expr(inner);
                    expr.span = open.merge(close);
                    Ok(p.arena.alloc_expr(expr))
                });
            }
            TokenKind::MovementList => {
                return Err(ParseError::new(
                    ParseErrorKind::MovementListRead,
                    token.span,
                ));
            }
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression { found },
                    token.span,
                ));
            }
        };

        self.advance();
        Ok(self.arena.alloc_expr(Expr::new(kind, token.span)))
    }
}
