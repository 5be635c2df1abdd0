//! Shared test utilities for phase tests.

use seek_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use seek_ir::{Direction, StringInterner, TokenList};
use seekc::{run_program, Position, RunConfig, SeekError, StepBudget};

pub use Direction::{Down, Left, Right, Up};

/// Run `source` with both positions at the origin and the default budget.
pub fn run(source: &str) -> Result<Vec<Direction>, SeekError> {
    run_program(source, &RunConfig::default())
}

/// Run `source` and expect success.
pub fn moves(source: &str) -> Vec<Direction> {
    match run(source) {
        Ok(moves) => moves,
        Err(e) => panic!("expected {source:?} to run, got {e}"),
    }
}

/// Run `source` with explicit positions.
pub fn moves_at(source: &str, player: (i64, i64), goal: (i64, i64)) -> Vec<Direction> {
    let config = RunConfig::new(Position::from(player), Position::from(goal));
    run_program(source, &config).unwrap()
}

/// Run `source` with a step budget.
pub fn run_with_budget(source: &str, budget: u64) -> Result<Vec<Direction>, SeekError> {
    let config = RunConfig::default().with_step_budget(StepBudget::new(budget).unwrap());
    run_program(source, &config)
}

/// Run `source` and expect failure.
pub fn run_err(source: &str) -> SeekError {
    match run(source) {
        Ok(moves) => panic!("expected {source:?} to fail, got {moves:?}"),
        Err(e) => e,
    }
}

/// Lex `source` and expect success.
pub fn lex(source: &str) -> TokenList {
    let mut interner = StringInterner::new();
    seek_lexer::lex(source, &mut interner).unwrap()
}

/// Render the diagnostic for `err` against `source`, without colors.
pub fn render(err: &SeekError, source: &str) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
            .with_source(source)
            .with_file_path("prog.seek");
        emitter.emit(&err.to_diagnostic());
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}
