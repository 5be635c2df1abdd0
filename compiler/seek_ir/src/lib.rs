//! Seek IR - shared data types for the seek_lang front end.
//!
//! This crate contains the data that flows between the pipeline phases:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`, `Program`) stored in an `ExprArena`
//! - `Direction`, the unit of the evaluator's output
//!
//! # Design Philosophy
//!
//! - **Intern identifiers**: `&str` → `Name(u32)`
//! - **Flatten the tree**: no `Box<Expr>`, children are `ExprId`/`StmtId` indices
//! - Every node type is `Copy`, so the evaluator can walk the arena without
//!   holding borrows across recursive calls.

mod arena;
pub mod ast;
mod direction;
mod interner;
mod name;
pub mod pretty;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, Expr, ExprId, ExprKind, LogicalOp, Program, Stmt, StmtId, StmtKind, StmtRange,
    UnaryOp,
};
pub use direction::Direction;
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenClass, TokenKind, TokenList};
