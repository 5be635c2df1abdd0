//! Lexer for seek_lang.
//!
//! Scanning tries an ordered table of rules at the current offset and commits
//! to the first one that matches (see [`rules::RULES`]). Rule order carries
//! meaning: `<=` is tried before `<`, and every keyword before the identifier
//! rule, so `update` lexes as `up` followed by the identifier `date`.
//!
//! The first position where no rule matches aborts lexing; no partial token
//! list is returned. Spans are `u32` offsets, so sources longer than
//! `u32::MAX` bytes are rejected before scanning starts.

mod lex_error;
pub mod rules;


pub use lex_error::{LexError, LexErrorKind};

use rules::{Action, RULES};
use seek_ir::{Span, StringInterner, Token, TokenKind, TokenList};

/// Lex source text into a [`TokenList`] terminated by `Eof`.
///
/// Identifiers are interned into `interner`.
pub fn lex(source: &str, interner: &mut StringInterner) -> Result<TokenList, LexError> {
    let eof = source_end(source.len())?;
    let mut tokens = TokenList::new();
    let mut pos = 0;

    while pos < source.len() {
        let Some((rule, len)) = RULES
            .iter()
            .find_map(|rule| rule.pattern.match_at(source, pos).map(|len| (rule, len)))
        else {
            return Err(LexError::unrecognized(source, pos));
        };

        let end = pos + len;
        let span = Span::from_range(pos..end);
        let text = &source[pos..end];

        let kind = match rule.action {
            Action::Skip => None,
            Action::Emit(kind) => Some(kind),
            Action::Int => Some(
                text.parse::<i64>()
                    .map(TokenKind::Int)
                    .map_err(|_| LexError::integer_too_large(span, text))?,
            ),
            Action::Ident => Some(TokenKind::Ident(interner.intern(text))),
        };

        if let Some(kind) = kind {
            tokens.push(Token::new(kind, span));
        }
        pos = end;
    }

    tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));
    Ok(tokens)
}

/// Offset of the end of a source of `len` bytes, if every span fits in `u32`.
fn source_end(len: usize) -> Result<u32, LexError> {
    u32::try_from(len).map_err(|_| LexError::source_too_large(len))
}
