//! AST node types.
//!
//! Expressions and statements live in an [`ExprArena`](crate::ExprArena) and
//! refer to their children by index. A block is a contiguous range in the
//! arena's statement list, so every node is `Copy`.
//!
//! Movement is structurally a statement (`StmtKind::Move`): the parser rejects
//! direction keywords in operand position, so every `Expr` evaluates to an
//! integer.

mod operators;

pub use operators::{BinaryOp, LogicalOp, UnaryOp};

use crate::{Direction, ExprArena, Name, Span};
use std::fmt;

/// Index of an expression in an `ExprArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a statement in an `ExprArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// A block: a range into the arena's flattened statement-list storage.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StmtRange {
    pub start: u32,
    pub len: u32,
}

impl StmtRange {
    pub const EMPTY: StmtRange = StmtRange { start: 0, len: 0 };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }
}

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants. Every variant reduces to one integer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: 42
    Int(i64),

    /// Variable reference
    Ident(Name),

    /// Arithmetic or comparison: `a + b`, `a <= b`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Short-circuit logic: `a and b`, `a or b`
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },

    /// Prefix operator: `-a`, `not a`
    Unary { op: UnaryOp, operand: ExprId },
}

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `name = value`
    Assign { target: Name, value: ExprId },

    /// `if cond do then_block [else else_block] end`
    If {
        cond: ExprId,
        then_block: StmtRange,
        else_block: Option<StmtRange>,
    },

    /// `for count do body end`: the body runs `count` times
    For { count: ExprId, body: StmtRange },

    /// A bare direction keyword; appends to the movement list
    Move(Direction),
}

/// A parsed program: the arena plus its top-level block.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub arena: ExprArena,
    pub body: StmtRange,
}

impl Program {
    pub fn new(arena: ExprArena, body: StmtRange) -> Self {
        Program { arena, body }
    }

    /// Top-level statements in source order.
    pub fn statements(&self) -> &[StmtId] {
        self.arena.get_block(self.body)
    }
}
