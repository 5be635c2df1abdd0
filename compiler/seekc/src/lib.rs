//! seek_lang driver.
//!
//! Ties the phases together: source text is lexed, parsed and evaluated
//! against a [`RunConfig`], producing the robot's move sequence. Each run is
//! independent; no state is shared between calls.
//!
//! Two entry points are provided:
//!
//! - [`run_program`] returns a [`SeekError`] describing the first failure.
//! - [`evaluate_seek_lang`] collapses every failure to `None`, for hosts that
//!   only care whether a usable move sequence exists.

pub mod board;
pub mod commands;
pub mod tracing_setup;

use seek_diagnostic::{Diagnostic, ErrorCode};
use seek_eval::EvalError;
use seek_lexer::LexError;
use seek_parse::ParseError;

pub use board::{Board, ReplayOutcome};
pub use seek_eval::{Position, StepBudget};
pub use seek_ir::Direction;

/// Parameters of a single run.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct RunConfig {
    pub player: Position,
    pub goal: Position,
    pub step_budget: StepBudget,
}

impl RunConfig {
    pub fn new(player: Position, goal: Position) -> Self {
        RunConfig {
            player,
            goal,
            step_budget: StepBudget::DEFAULT,
        }
    }

    #[must_use]
    pub fn with_step_budget(mut self, step_budget: StepBudget) -> Self {
        self.step_budget = step_budget;
        self
    }
}

/// The first error raised by any phase of a run.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum SeekError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl SeekError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SeekError::Lex(e) => e.code(),
            SeekError::Parse(e) => e.code(),
            SeekError::Eval(e) => e.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SeekError::Lex(e) => e.to_diagnostic(),
            SeekError::Parse(e) => e.to_diagnostic(),
            SeekError::Eval(e) => e.to_diagnostic(),
        }
    }
}

/// Lex, parse and evaluate `source`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run_program(source: &str, config: &RunConfig) -> Result<Vec<Direction>, SeekError> {
    let mut interner = seek_ir::StringInterner::new();
    let tokens = seek_lexer::lex(source, &mut interner)?;
    tracing::debug!(tokens = tokens.len(), "lexed");

    let program = seek_parse::parse(&tokens, &interner)?;
    tracing::debug!(statements = program.statements().len(), "parsed");

    let moves = seek_eval::evaluate(
        &program,
        &interner,
        config.player,
        config.goal,
        config.step_budget,
    )?;
    tracing::debug!(moves = moves.len(), "evaluated");
    Ok(moves)
}

/// Evaluate `source` with the default step budget, discarding error details.
///
/// Returns `None` when any phase fails. The failure is logged at `warn`.
pub fn evaluate_seek_lang(source: &str, player: Position, goal: Position) -> Option<Vec<Direction>> {
    let config = RunConfig::new(player, goal);
    match run_program(source, &config) {
        Ok(moves) => Some(moves),
        Err(err) => {
            tracing::warn!(code = %err.code(), error = %err, "seek_lang run failed");
            None
        }
    }
}
