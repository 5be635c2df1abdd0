use super::{moves, run, run_with};
use crate::{EvalErrorKind, Position, StepBudget};
use pretty_assertions::assert_eq;
use seek_diagnostic::ErrorCode;
use seek_ir::{Direction, Span};

use Direction::{Down, Left, Right, Up};

#[test]
fn test_movements_in_source_order() {
    assert_eq!(moves("up\nright\nright\ndown;left"), vec![Up, Right, Right, Down, Left]);
    assert!(moves("").is_empty());
}

#[test]
fn test_for_counts() {
    assert!(moves("for 0 do up end").is_empty());
    assert_eq!(moves("for 3 do up end"), vec![Up, Up, Up]);
    assert_eq!(moves("for 2 do up; right end"), vec![Up, Right, Up, Right]);
}

#[test]
fn test_for_count_evaluated_once() {
    // Reassigning `n` inside the body does not change the iteration count.
    assert_eq!(
        moves("n = 2\nfor n do n = n + 10; up end"),
        vec![Up, Up]
    );
}

#[test]
fn test_nested_for() {
    assert_eq!(moves("for 2 do for 3 do up end end").len(), 6);
}

#[test]
fn test_if_else() {
    assert_eq!(moves("if 1 == 1 do left end else right end"), vec![Left]);
    assert_eq!(moves("if 1 == 2 do left end else right end"), vec![Right]);
    assert!(moves("if 0 do left end").is_empty());
}

#[test]
fn test_variable_condition() {
    assert_eq!(moves("x = 5; if x > 3 do down end"), vec![Down]);
    assert!(moves("x = 2; if x > 3 do down end").is_empty());
}

#[test]
fn test_logical_operators_short_circuit() {
    // The right operand would divide by zero if it were evaluated.
    assert_eq!(moves("if 0 and 1 / 0 do up end else down end"), vec![Down]);
    assert_eq!(moves("if 1 or 1 / 0 do up end"), vec![Up]);
    assert!(run("if 1 and 1 / 0 do up end").is_err());
}

#[test]
fn test_logical_results_are_normalized() {
    assert_eq!(
        moves("x = 5 and 7\nif x == 1 do up end"),
        vec![Up]
    );
    assert_eq!(moves("x = 0 or -3\nif x == 1 do up end"), vec![Up]);
}

#[test]
fn test_walk_to_goal_using_positions() {
    let source = "\
dx = goal_x - player_x
dy = goal_y - player_y
if dx > 0 do for dx do right end end
if dx < 0 do for -dx do left end end
if dy > 0 do for dy do up end end
if dy < 0 do for -dy do down end end
";
    let result = run_with(
        source,
        Position::new(2, 0),
        Position::new(0, 2),
        StepBudget::DEFAULT,
    )
    .unwrap();
    assert_eq!(result, vec![Left, Left, Up, Up]);
}

#[test]
fn test_undefined_variable() {
    let err = run("if steps > 0 do up end").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "steps".to_string()
        }
    );
    assert_eq!(err.span, Span::new(3, 8));
    assert_eq!(err.code(), ErrorCode::E2001);
}

#[test]
fn test_negative_loop_count() {
    let err = run("for -1 do up end").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::NegativeLoopCount { count: -1 });
    assert_eq!(err.span, Span::new(4, 6));
    assert_eq!(err.code(), ErrorCode::E2003);
}

#[test]
fn test_division_by_zero_at_runtime() {
    let err = run("z = 0\nx = 10 / z").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.span, Span::new(10, 16));
}

#[test]
fn test_overflow_at_runtime() {
    let err = run("x = 9223372036854775807 + 1").unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2004);
}

#[test]
fn test_read_only_position_variable() {
    let err = run("player_x = 3").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ReadOnlyVariable {
            name: "player_x".to_string()
        }
    );
    assert_eq!(err.code(), ErrorCode::E2006);
}

#[test]
fn test_error_discards_moves() {
    // Moves made before the failure are not returned.
    assert!(run("up\nup\nfor -1 do up end").is_err());
}

#[test]
fn test_runs_are_independent() {
    assert!(moves("x = 1").is_empty());
    assert!(run("if x do up end").is_err());
}

#[test]
fn test_diagnostic_for_eval_error() {
    let diag = run("for -2 do up end").unwrap_err().to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E2003);
    assert_eq!(diag.message, "`for` count must not be negative, got -2");
    assert_eq!(diag.labels[0].span, Span::new(4, 6));
    assert!(diag.labels[0].is_primary);
}
