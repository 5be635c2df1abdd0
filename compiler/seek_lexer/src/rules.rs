//! The ordered rule table.
//!
//! Each rule pairs a [`Pattern`] with an [`Action`]. The lexer tries the rules
//! top to bottom and takes the first match, which is not always the longest.

use seek_ir::TokenKind;

/// What a rule recognizes at a given offset.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pattern {
    /// One or more of space, tab, carriage return.
    Whitespace,
    /// An empty line starting at a line start: `[ \t\r]*\n`.
    BlankLine,
    /// An exact string.
    Literal(&'static str),
    /// One or more ASCII digits.
    Digits,
    /// An ASCII letter followed by letters, digits or `_`.
    Identifier,
}

/// What to do with the matched text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Consume without emitting a token.
    Skip,
    /// Emit a fixed token.
    Emit(TokenKind),
    /// Emit an integer literal.
    Int,
    /// Emit an interned identifier.
    Ident,
}

#[derive(Copy, Clone, Debug)]
pub struct Rule {
    pub pattern: Pattern,
    pub action: Action,
}

const fn rule(pattern: Pattern, action: Action) -> Rule {
    Rule { pattern, action }
}

const fn reserved(text: &'static str, kind: TokenKind) -> Rule {
    rule(Pattern::Literal(text), Action::Emit(kind))
}

/// The rules in priority order.
pub static RULES: &[Rule] = &[
    rule(Pattern::Whitespace, Action::Skip),
    rule(Pattern::BlankLine, Action::Skip),
    reserved("\n", TokenKind::Newline),
    reserved("(", TokenKind::LParen),
    reserved(")", TokenKind::RParen),
    reserved("+", TokenKind::Plus),
    reserved("-", TokenKind::Minus),
    reserved("*", TokenKind::Star),
    reserved("/", TokenKind::Slash),
    reserved(";", TokenKind::Semicolon),
    reserved("<=", TokenKind::LtEq),
    reserved("<", TokenKind::Lt),
    reserved(">=", TokenKind::GtEq),
    reserved(">", TokenKind::Gt),
    reserved("==", TokenKind::EqEq),
    reserved("!=", TokenKind::NotEq),
    reserved("=", TokenKind::Eq),
    reserved("up", TokenKind::Up),
    reserved("down", TokenKind::Down),
    reserved("left", TokenKind::Left),
    reserved("right", TokenKind::Right),
    reserved("and", TokenKind::And),
    reserved("or", TokenKind::Or),
    reserved("not", TokenKind::Not),
    reserved("if", TokenKind::If),
    reserved("else", TokenKind::Else),
    reserved("for", TokenKind::For),
    reserved("do", TokenKind::Do),
    reserved("end", TokenKind::End),
    reserved("movement_list", TokenKind::MovementList),
    rule(Pattern::Digits, Action::Int),
    rule(Pattern::Identifier, Action::Ident),
];

#[inline]
fn is_horizontal_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

impl Pattern {
    /// Length in bytes of the match starting at `pos`, if any. Never zero.
    pub fn match_at(self, source: &str, pos: usize) -> Option<usize> {
        let rest = source.as_bytes().get(pos..)?;
        let len = match self {
            Pattern::Whitespace => count_while(rest, is_horizontal_space),
            Pattern::BlankLine => {
                let at_line_start = pos == 0 || source.as_bytes()[pos - 1] == b'\n';
                if !at_line_start {
                    return None;
                }
                let spaces = count_while(rest, is_horizontal_space);
                if rest.get(spaces) == Some(&b'\n') {
                    spaces + 1
                } else {
                    0
                }
            }
            Pattern::Literal(text) => {
                if rest.starts_with(text.as_bytes()) {
                    text.len()
                } else {
                    0
                }
            }
            Pattern::Digits => count_while(rest, |b| b.is_ascii_digit()),
            Pattern::Identifier => match rest.first() {
                Some(b) if b.is_ascii_alphabetic() => {
                    1 + count_while(&rest[1..], |b| b.is_ascii_alphanumeric() || b == b'_')
                }
                _ => 0,
            },
        };
        (len > 0).then_some(len)
    }
}

#[inline]
fn count_while(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(b)).count()
}
