//! Arena allocation for the flat AST.
//!
//! - All expressions stored in one `Vec`
//! - All statements stored in one `Vec`
//! - Blocks are `StmtRange`s into `stmt_lists`, copied there once the block's
//!   statements are known (nested blocks allocate their own statements first)

use super::ast::{Expr, ExprId, Stmt, StmtId, StmtRange};

/// Contiguous storage for one program's expressions and statements.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    stmt_lists: Vec<StmtId>,
}

/// Convert an arena length to a `u32` index.
///
/// # Panics
/// Panics if the arena outgrows `u32::MAX` entries.
#[inline]
fn to_index(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} arena exceeded u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on token count.
    pub fn with_capacity(token_count: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(token_count / 2),
            stmts: Vec::with_capacity(token_count / 4),
            stmt_lists: Vec::with_capacity(token_count / 4),
        }
    }

    // ===== Expressions =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_index(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Statements =====

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_index(self.stmts.len(), "statement"));
        self.stmts.push(stmt);
        id
    }

    /// Get statement by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn get_stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    // ===== Blocks =====

    /// Store a block's statement IDs contiguously and return its range.
    pub fn alloc_block(&mut self, stmts: &[StmtId]) -> StmtRange {
        if stmts.is_empty() {
            return StmtRange::EMPTY;
        }
        let start = to_index(self.stmt_lists.len(), "block");
        self.stmt_lists.extend_from_slice(stmts);
        StmtRange {
            start,
            len: to_index(stmts.len(), "block"),
        }
    }

    /// Get the statement IDs of a block.
    ///
    /// # Panics
    /// Panics if `range` does not come from this arena.
    #[inline]
    #[track_caller]
    pub fn get_block(&self, range: StmtRange) -> &[StmtId] {
        let start = range.start as usize;
        &self.stmt_lists[start..start + range.len()]
    }
}
