#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{parse, ParseError};
use seek_ir::{pretty, Program, StringInterner};

fn parse_source(source: &str) -> Result<(Program, StringInterner), ParseError> {
    let mut interner = StringInterner::new();
    let tokens = seek_lexer::lex(source, &mut interner).unwrap();
    parse(&tokens, &interner).map(|program| (program, interner))
}

/// Parse and render as S-expressions, one top-level statement per line.
fn sexpr(source: &str) -> String {
    let (program, interner) = parse_source(source).unwrap();
    pretty::program_to_string(&program, &interner)
}

fn parse_err(source: &str) -> ParseError {
    parse_source(source).unwrap_err()
}
