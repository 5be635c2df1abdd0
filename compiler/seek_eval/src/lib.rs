//! Evaluator for seek_lang.
//!
//! Walks a parsed [`Program`] against a fresh [`Environment`] seeded with the
//! player and goal positions, and returns the moves appended by movement
//! statements. Each run owns its environment and move list; nothing persists
//! between runs.
//!
//! Termination: `for` counts are evaluated once and must be non-negative,
//! and every executed statement is charged against a [`StepBudget`].

mod budget;
mod environment;
pub mod errors;
mod interpreter;
mod movement;
mod operators;
mod position;
mod stack;

#[cfg(test)]
mod tests;

pub use budget::StepBudget;
pub use environment::{AssignError, Environment, Mutability};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use movement::MovementList;
pub use operators::{evaluate_binary, evaluate_unary, is_truthy};
pub use position::Position;

use seek_ir::{Direction, Program, StringInterner};

/// Evaluate `program` and return its move sequence.
#[tracing::instrument(level = "debug", skip_all, fields(player = %player, goal = %goal, budget = budget.limit()))]
pub fn evaluate(
    program: &Program,
    interner: &StringInterner,
    player: Position,
    goal: Position,
    budget: StepBudget,
) -> Result<Vec<Direction>, EvalError> {
    let env = Environment::with_positions(player, goal);
    Interpreter::new(program, interner, env, budget).run()
}
