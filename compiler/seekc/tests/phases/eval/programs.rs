use pretty_assertions::assert_eq;
use seek_eval::EvalErrorKind;
use seekc::SeekError;

use crate::common::{moves, moves_at, run_err, Down, Left, Right, Up};

#[test]
fn straight_line_program_preserves_order() {
    assert_eq!(
        moves("up\nup\nright\ndown\nleft\nleft"),
        vec![Up, Up, Right, Down, Left, Left]
    );
}

#[test]
fn straight_line_length_matches_statement_count() {
    let source = ["up", "down", "left", "right"].repeat(5).join("; ");
    assert_eq!(moves(&source).len(), 20);
}

#[test]
fn for_zero_produces_nothing() {
    assert!(moves("for 0 do up end").is_empty());
}

#[test]
fn for_three_repeats_body() {
    assert_eq!(moves("for 3 do up end"), vec![Up, Up, Up]);
}

#[test]
fn if_else_after_end_picks_a_branch() {
    assert_eq!(moves("if 1 == 1 do left end else right end"), vec![Left]);
    assert_eq!(moves("if 1 == 2 do left end else right end"), vec![Right]);
}

#[test]
fn if_else_inside_block_picks_a_branch() {
    assert_eq!(moves("if 1 == 1 do left else right end"), vec![Left]);
    assert_eq!(moves("if 1 == 2 do left else right end"), vec![Right]);
}

#[test]
fn else_after_nested_if_belongs_to_enclosing_if() {
    assert_eq!(moves("if 0 do\n  if 1 do up end\nelse\n  down\nend"), vec![Down]);
    assert!(moves("if 1 do if 0 do up end else down end").is_empty());
}

#[test]
fn variable_drives_condition() {
    assert_eq!(moves("x = 5; if x > 3 do down end"), vec![Down]);
    assert!(moves("x = 2; if x > 3 do down end").is_empty());
}

#[test]
fn loop_count_is_evaluated_once() {
    // Reassigning `n` inside the body does not change the iteration count.
    assert_eq!(moves("n = 2\nfor n do\n  n = 10\n  up\nend"), vec![Up, Up]);
}

#[test]
fn nested_loops_multiply() {
    assert_eq!(moves("for 2 do for 3 do right end end").len(), 6);
}

#[test]
fn arithmetic_precedence_and_truncating_division() {
    assert_eq!(moves("for 1 + 2 * 2 do up end").len(), 5);
    assert_eq!(moves("for (1 + 2) * 2 do up end").len(), 6);
    assert_eq!(moves("for 7 / 2 do up end").len(), 3);
    assert_eq!(moves("x = 0 - 7 / 2; if x == 0 - 3 do up end"), vec![Up]);
}

#[test]
fn logical_operators_short_circuit() {
    // The right operand would divide by zero if evaluated.
    assert_eq!(moves("if 0 and 1 / 0 do up else down end"), vec![Down]);
    assert_eq!(moves("if 1 or 1 / 0 do up else down end"), vec![Up]);
    assert_eq!(moves("if not 0 do left end"), vec![Left]);
}

#[test]
fn positions_are_visible_to_programs() {
    let walk = "for goal_x - player_x do right end\nfor goal_y - player_y do up end";
    assert_eq!(moves_at(walk, (0, 0), (2, 1)), vec![Right, Right, Up]);
    assert!(moves_at(walk, (1, 0), (1, 0)).is_empty());
}

#[test]
fn positions_are_read_only() {
    let err = run_err("player_x = 3");
    assert!(matches!(
        err,
        SeekError::Eval(ref e) if matches!(e.kind, EvalErrorKind::ReadOnlyVariable { .. })
    ));
}

#[test]
fn negative_loop_count_is_an_eval_error() {
    let SeekError::Eval(err) = run_err("for -1 do up end") else {
        panic!("expected an eval error");
    };
    assert_eq!(err.kind, EvalErrorKind::NegativeLoopCount { count: -1 });
}

#[test]
fn undefined_variable_is_an_eval_error() {
    let SeekError::Eval(err) = run_err("up\nif y do up end") else {
        panic!("expected an eval error");
    };
    assert!(matches!(err.kind, EvalErrorKind::UndefinedVariable { .. }));
}

#[test]
fn division_by_zero_is_an_eval_error() {
    let SeekError::Eval(err) = run_err("x = 1 / 0") else {
        panic!("expected an eval error");
    };
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
}

#[test]
fn overflow_is_an_eval_error() {
    let SeekError::Eval(err) = run_err("x = 9223372036854775807 + 1") else {
        panic!("expected an eval error");
    };
    assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
}

#[test]
fn runs_do_not_share_variables() {
    assert_eq!(moves("x = 1; if x do up end"), vec![Up]);
    assert!(matches!(run_err("if x do up end"), SeekError::Eval(_)));
}
