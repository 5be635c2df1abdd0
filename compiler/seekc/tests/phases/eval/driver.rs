use pretty_assertions::assert_eq;
use seek_diagnostic::ErrorCode;
use seekc::{evaluate_seek_lang, run_program, Position, RunConfig, SeekError};

use crate::common::{render, run_err, Right, Up};

#[test]
fn historical_entry_point_returns_moves() {
    assert_eq!(
        evaluate_seek_lang(
            "for 2 do right end; up",
            Position::new(0, 0),
            Position::new(2, 1)
        ),
        Some(vec![Right, Right, Up])
    );
}

#[test]
fn historical_entry_point_collapses_every_failure_to_none() {
    for source in ["@", "movement_list = 1", "for -1 do up end", "for 3 do up"] {
        let result = evaluate_seek_lang(source, Position::new(0, 0), Position::new(1, 1));
        assert_eq!(result, None, "{source}");
    }
}

#[test]
fn empty_success_is_distinct_from_failure() {
    let origin = Position::new(0, 0);
    assert_eq!(evaluate_seek_lang("", origin, origin), Some(vec![]));
}

#[test]
fn each_phase_maps_to_its_error_family() {
    assert!(matches!(run_err("#"), SeekError::Lex(_)));
    assert!(matches!(run_err("up up"), SeekError::Parse(_)));
    assert!(matches!(run_err("x = 1 / 0"), SeekError::Eval(_)));
}

#[test]
fn run_config_carries_positions() {
    let config = RunConfig::new(Position::new(2, 0), Position::new(0, 2));
    let moves = run_program("if player_x > goal_x do up end", &config).unwrap();
    assert_eq!(moves, vec![Up]);
}

#[test]
fn eval_diagnostic_includes_location_and_code() {
    let source = "x = 3\ny = x / 0";
    let err = run_err(source);
    assert!(matches!(err, SeekError::Eval(_)));
    let text = render(&err, source);
    assert!(text.starts_with("error[E2002]"), "{text}");
    assert!(text.contains("prog.seek:2:"), "{text}");
}

#[test]
fn seek_error_display_matches_phase_error() {
    let err = run_err("for -1 do up end");
    let SeekError::Eval(inner) = &err else {
        panic!("expected an eval error");
    };
    assert_eq!(err.to_string(), inner.to_string());
    assert_eq!(err.code(), ErrorCode::E2003);
}

#[test]
fn documented_codes_list_every_phase() {
    let codes = seekc::commands::documented_codes();
    assert!(codes.starts_with("E0001, E0002, E0003, E1001"), "{codes}");
    assert!(codes.ends_with("E2006"), "{codes}");
}
