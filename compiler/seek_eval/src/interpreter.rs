//! Tree-walking interpreter.
//!
//! Statements are charged against the step budget before they run. The
//! move list is threaded through the walk as interpreter state and returned
//! only when the whole program succeeds.

use seek_ir::{
    Direction, ExprId, ExprKind, LogicalOp, Program, Span, StmtId, StmtKind, StmtRange,
    StringInterner,
};
use tracing::{debug, trace};

use crate::budget::StepCounter;
use crate::errors::{budget_exceeded, negative_loop_count, read_only_variable, undefined_variable};
use crate::operators::{evaluate_binary, evaluate_unary, is_truthy};
use crate::stack::ensure_sufficient_stack;
use crate::{AssignError, Environment, EvalError, EvalResult, MovementList, StepBudget};

/// Interpreter state for one run.
pub struct Interpreter<'a> {
    program: &'a Program,
    interner: &'a StringInterner,
    env: Environment,
    moves: MovementList,
    steps: StepCounter,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        program: &'a Program,
        interner: &'a StringInterner,
        env: Environment,
        budget: StepBudget,
    ) -> Self {
        Interpreter {
            program,
            interner,
            env,
            moves: MovementList::new(),
            steps: StepCounter::new(budget),
        }
    }

    /// Run the program's top-level block and return the moves.
    pub fn run(mut self) -> Result<Vec<Direction>, EvalError> {
        self.exec_block(self.program.body)?;
        debug!(
            moves = self.moves.len(),
            steps = self.steps.used(),
            "evaluation finished"
        );
        Ok(self.moves.into_vec())
    }

    fn exec_block(&mut self, block: StmtRange) -> EvalResult<()> {
        let program = self.program;
        for &stmt in program.arena.get_block(block) {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, id: StmtId) -> EvalResult<()> {
        let stmt = *self.program.arena.get_stmt(id);
        if !self.steps.charge() {
            return Err(EvalError::new(budget_exceeded(self.steps.limit()), stmt.span));
        }
        trace!(step = self.steps.used(), kind = ?stmt.kind, "exec");

        match stmt.kind {
            StmtKind::Move(direction) => {
                self.moves.push(direction);
                Ok(())
            }
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                self.env.assign(target, value).map_err(|e| match e {
                    AssignError::Immutable => EvalError::new(
                        read_only_variable(self.interner.lookup(target)),
                        stmt.span,
                    ),
                })
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                if is_truthy(self.eval_expr(cond)?) {
                    ensure_sufficient_stack(|| self.exec_block(then_block))
                } else if let Some(else_block) = else_block {
                    ensure_sufficient_stack(|| self.exec_block(else_block))
                } else {
                    Ok(())
                }
            }
            StmtKind::For { count, body } => {
                let n = self.eval_expr(count)?;
                if n < 0 {
                    return Err(EvalError::new(negative_loop_count(n), self.span_of(count)));
                }
                // Empty bodies cost nothing per iteration and have no effect.
                if body.is_empty() {
                    return Ok(());
                }
                for _ in 0..n {
                    ensure_sufficient_stack(|| self.exec_block(body))?;
                }
                Ok(())
            }
        }
    }

    fn span_of(&self, id: ExprId) -> Span {
        self.program.arena.get_expr(id).span
    }

    /// Evaluate an expression to an integer.
    pub fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.program.arena.get_expr(id);
        match expr.kind {
            ExprKind::Int(n) => Ok(n),
            ExprKind::Ident(name) => self.env.lookup(name).ok_or_else(|| {
                EvalError::new(undefined_variable(self.interner.lookup(name)), expr.span)
            }),
            ExprKind::Binary { op, left, right } => {
                let left = ensure_sufficient_stack(|| self.eval_expr(left))?;
                let right = ensure_sufficient_stack(|| self.eval_expr(right))?;
                evaluate_binary(op, left, right).map_err(|kind| EvalError::new(kind, expr.span))
            }
            ExprKind::Logical { op, left, right } => {
                let left = is_truthy(ensure_sufficient_stack(|| self.eval_expr(left))?);
                let short_circuit = match op {
                    LogicalOp::And => !left,
                    LogicalOp::Or => left,
                };
                if short_circuit {
                    return Ok(i64::from(left));
                }
                let right = is_truthy(ensure_sufficient_stack(|| self.eval_expr(right))?);
                Ok(i64::from(right))
            }
            ExprKind::Unary { op, operand } => {
                let value = ensure_sufficient_stack(|| self.eval_expr(operand))?;
                evaluate_unary(op, value).map_err(|kind| EvalError::new(kind, expr.span))
            }
        }
    }
}
