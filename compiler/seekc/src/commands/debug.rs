//! Debug commands: `lex` and `parse` for inspecting the front end.

use seek_diagnostic::emitter::ColorMode;
use seek_ir::{pretty, StringInterner};

use super::{read_file, report_and_exit};
use crate::SeekError;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let mut interner = StringInterner::new();

    let toks = match seek_lexer::lex(&content, &mut interner) {
        Ok(toks) => toks,
        Err(e) => report_and_exit(&content, path, ColorMode::Auto, &SeekError::from(e)),
    };

    let source_toks = toks.source_tokens();
    println!("Tokens for '{}' ({} tokens):", path, source_toks.len());
    for tok in source_toks {
        println!(
            "  {:<8} {:?} @ {}",
            tok.class().as_str(),
            tok.text(&content),
            tok.span
        );
    }
}

/// Parse a file and display the program as S-expressions.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let mut interner = StringInterner::new();

    let program = seek_lexer::lex(&content, &mut interner)
        .map_err(SeekError::from)
        .and_then(|toks| seek_parse::parse(&toks, &interner).map_err(SeekError::from));
    let program = match program {
        Ok(program) => program,
        Err(e) => report_and_exit(&content, path, ColorMode::Auto, &e),
    };

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.statements().len());
    println!("  Expressions: {}", program.arena.expr_count());

    let rendered = pretty::program_to_string(&program, &interner);
    if !rendered.is_empty() {
        println!();
        println!("{rendered}");
    }
}
