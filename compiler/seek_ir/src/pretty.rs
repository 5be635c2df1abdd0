//! S-expression rendering of a parsed program.
//!
//! Each top-level statement renders on its own line; nested blocks render
//! inline as `(do ...)` / `(else ...)`.
//!
//! ```text
//! x = 1 + 2 * 3        (= x (+ 1 (* 2 3)))
//! for 2 do up end      (for 2 (do up))
//! ```

use crate::{ExprId, ExprKind, Program, StmtId, StmtKind, StmtRange, StringInterner};
use std::fmt::Write;

/// Render a whole program, one top-level statement per line.
pub fn program_to_string(program: &Program, interner: &StringInterner) -> String {
    let printer = Printer { program, interner };
    let mut out = String::new();
    for (i, &stmt) in program.statements().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        printer.stmt(stmt, &mut out);
    }
    out
}

struct Printer<'a> {
    program: &'a Program,
    interner: &'a StringInterner,
}

impl Printer<'_> {
    fn stmt(&self, id: StmtId, out: &mut String) {
        match self.program.arena.get_stmt(id).kind {
            StmtKind::Assign { target, value } => {
                out.push_str("(= ");
                out.push_str(self.interner.lookup(target));
                out.push(' ');
                self.expr(value, out);
                out.push(')');
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                out.push_str("(if ");
                self.expr(cond, out);
                out.push(' ');
                self.block("do", then_block, out);
                if let Some(else_block) = else_block {
                    out.push(' ');
                    self.block("else", else_block, out);
                }
                out.push(')');
            }
            StmtKind::For { count, body } => {
                out.push_str("(for ");
                self.expr(count, out);
                out.push(' ');
                self.block("do", body, out);
                out.push(')');
            }
            StmtKind::Move(direction) => out.push_str(direction.as_str()),
        }
    }

    fn block(&self, head: &str, range: StmtRange, out: &mut String) {
        out.push('(');
        out.push_str(head);
        for &stmt in self.program.arena.get_block(range) {
            out.push(' ');
            self.stmt(stmt, out);
        }
        out.push(')');
    }

    fn expr(&self, id: ExprId, out: &mut String) {
        match self.program.arena.get_expr(id).kind {
            ExprKind::Int(n) => {
                // Writing to a String cannot fail.
                let _ = write!(out, "{n}");
            }
            ExprKind::Ident(name) => out.push_str(self.interner.lookup(name)),
            ExprKind::Binary { op, left, right } => {
                self.node(op.as_symbol(), &[left, right], out);
            }
            ExprKind::Logical { op, left, right } => {
                self.node(op.as_symbol(), &[left, right], out);
            }
            ExprKind::Unary { op, operand } => self.node(op.as_symbol(), &[operand], out),
        }
    }

    fn node(&self, head: &str, children: &[ExprId], out: &mut String) {
        out.push('(');
        out.push_str(head);
        for &child in children {
            out.push(' ');
            self.expr(child, out);
        }
        out.push(')');
    }
}
