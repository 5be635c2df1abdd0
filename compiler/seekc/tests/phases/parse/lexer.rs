use pretty_assertions::assert_eq;
use seek_diagnostic::ErrorCode;
use seek_ir::{TokenClass, TokenKind};
use seek_lexer::LexErrorKind;
use seekc::SeekError;

use crate::common::{lex, render, run_err};

#[test]
fn unrecognized_character_fails_the_whole_run() {
    let err = run_err("up\n@\ndown");
    let SeekError::Lex(lex_err) = &err else {
        panic!("expected a lex error, got {err:?}");
    };
    assert_eq!(lex_err.kind, LexErrorKind::UnrecognizedChar { found: '@' });
    assert_eq!(err.code(), ErrorCode::E0001);
}

#[test]
fn unrecognized_character_after_valid_statements_still_fails() {
    // Lexing runs to completion before parsing starts.
    assert!(matches!(run_err("up; down; left $"), SeekError::Lex(_)));
}

#[test]
fn oversized_integer_is_a_lex_error() {
    let err = run_err("x = 99999999999999999999");
    assert_eq!(err.code(), ErrorCode::E0002);
}

#[test]
fn lex_diagnostic_points_at_line_and_column() {
    let source = "up\nx = @";
    let text = render(&run_err(source), source);
    assert!(text.starts_with("error[E0001]"), "{text}");
    assert!(text.contains("--> prog.seek:2:5"), "{text}");
    assert!(text.contains("2 | x = @"), "{text}");
}

#[test]
fn token_classes_follow_the_three_kinds() {
    let toks = lex("x = 10");
    let classes: Vec<_> = toks.source_tokens().iter().map(|t| t.class()).collect();
    assert_eq!(
        classes,
        vec![
            TokenClass::Identifier,
            TokenClass::Reserved,
            TokenClass::IntegerLiteral
        ]
    );
}

#[test]
fn token_list_ends_with_eof() {
    let toks = lex("up");
    assert_eq!(toks.len(), 2);
    assert_eq!(toks[1].kind, TokenKind::Eof);
    assert_eq!(toks.source_tokens().len(), 1);
}

#[test]
fn token_text_is_recoverable_from_source() {
    let source = "for 3 do up end";
    let toks = lex(source);
    let texts: Vec<_> = toks.source_tokens().iter().map(|t| t.text(source)).collect();
    assert_eq!(texts, vec!["for", "3", "do", "up", "end"]);
}

#[test]
fn relexing_joined_token_texts_is_stable() {
    let source = "x = 5\nif x >= 3 and not x == 4 do down end";
    let first = lex(source);
    let rejoined: String = first
        .source_tokens()
        .iter()
        .map(|t| format!(" {}", t.text(source)))
        .collect();
    let second = lex(&rejoined);
    let kinds = |list: &seek_ir::TokenList| {
        list.source_tokens().iter().map(|t| t.kind).collect::<Vec<_>>()
    };
    assert_eq!(kinds(&first), kinds(&second));
}
