#![allow(clippy::unwrap_used, clippy::expect_used)]

mod control_tests;

use crate::{evaluate, EvalError, Position, StepBudget};
use seek_ir::{Direction, StringInterner};

fn run_with(source: &str, player: Position, goal: Position, budget: StepBudget) -> Result<Vec<Direction>, EvalError> {
    let mut interner = StringInterner::new();
    let tokens = seek_lexer::lex(source, &mut interner).unwrap();
    let program = seek_parse::parse(&tokens, &interner).unwrap();
    evaluate(&program, &interner, player, goal, budget)
}

fn run(source: &str) -> Result<Vec<Direction>, EvalError> {
    run_with(source, Position::default(), Position::default(), StepBudget::DEFAULT)
}

fn moves(source: &str) -> Vec<Direction> {
    run(source).unwrap()
}
