use seek_diagnostic::ErrorCode;
use seek_parse::ParseErrorKind;
use seekc::SeekError;

use crate::common::{moves, render, run_err, Down, Up};

fn parse_kind(source: &str) -> ParseErrorKind {
    match run_err(source) {
        SeekError::Parse(e) => e.kind,
        other => panic!("expected a parse error for {source:?}, got {other:?}"),
    }
}

#[test]
fn assigning_movement_list_is_rejected() {
    assert_eq!(
        parse_kind("movement_list = 1"),
        ParseErrorKind::AssignToMovementList
    );
}

#[test]
fn assigning_movement_list_is_rejected_among_valid_statements() {
    assert_eq!(
        parse_kind("up\nx = 2\nmovement_list = 1\ndown"),
        ParseErrorKind::AssignToMovementList
    );
    assert_eq!(run_err("up; movement_list = 3").code(), ErrorCode::E1006);
}

#[test]
fn reading_movement_list_is_rejected() {
    assert_eq!(run_err("x = movement_list").code(), ErrorCode::E1007);
}

#[test]
fn direction_as_value_is_rejected() {
    assert_eq!(run_err("x = up").code(), ErrorCode::E1008);
}

#[test]
fn unterminated_block_is_a_parse_error() {
    assert!(matches!(
        parse_kind("for 3 do up"),
        ParseErrorKind::UnclosedBlock { .. }
    ));
    assert!(matches!(
        parse_kind("if 1 do up"),
        ParseErrorKind::UnclosedBlock { .. }
    ));
}

#[test]
fn unclosed_block_diagnostic_names_the_opener() {
    let source = "for 3 do\n  up";
    let text = render(&run_err(source), source);
    assert!(text.starts_with("error[E1003]"), "{text}");
    assert!(text.contains("`for` block opened here"), "{text}");
}

#[test]
fn statements_need_separators() {
    assert_eq!(run_err("up down").code(), ErrorCode::E1004);
}

#[test]
fn separators_may_be_mixed_and_repeated() {
    assert_eq!(moves("up;;\n\n down;\n"), vec![Up, Down]);
}

#[test]
fn crlf_source_matches_lf_source() {
    assert_eq!(
        moves("x = 1\r\n\r\nif x do\r\n  up\r\nend\r\n"),
        moves("x = 1\n\nif x do\n  up\nend\n")
    );
}

#[test]
fn empty_program_produces_no_moves() {
    assert!(moves("").is_empty());
    assert!(moves("\n\n").is_empty());
}
