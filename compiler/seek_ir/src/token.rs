//! Token types for the seek_lang lexer.

use super::{Direction, Name, Span};
use std::fmt;
use std::ops::Index;

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The exact source text this token was lexed from.
    ///
    /// Returns `""` if the span does not lie within `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or("")
    }

    /// The lexical class of this token.
    #[inline]
    pub fn class(&self) -> TokenClass {
        self.kind.class()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// The three lexical classes of seek_lang.
///
/// Keywords, operators, punctuation and the newline terminator are all
/// `Reserved`; there is no separate keyword table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenClass {
    Reserved,
    IntegerLiteral,
    Identifier,
}

impl TokenClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenClass::Reserved => "RESERVED",
            TokenClass::IntegerLiteral => "INT",
            TokenClass::Identifier => "ID",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds for seek_lang.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Unsigned decimal literal. The lexer guarantees it fits in `i64`.
    Int(i64),
    /// Identifier (interned)
    Ident(Name),

    /// Newline, an optional statement terminator
    Newline,
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    Semicolon,
    LtEq,
    Lt,
    GtEq,
    Gt,
    EqEq,
    NotEq,
    Eq,

    Up,
    Down,
    Left,
    Right,
    And,
    Or,
    Not,
    If,
    Else,
    For,
    Do,
    End,
    /// `movement_list`, reserved for the evaluator's accumulator
    MovementList,

    /// End of input sentinel, always the last token in a `TokenList`
    Eof,
}

impl TokenKind {
    /// The lexical class of this kind.
    pub const fn class(&self) -> TokenClass {
        match self {
            TokenKind::Int(_) => TokenClass::IntegerLiteral,
            TokenKind::Ident(_) => TokenClass::Identifier,
            _ => TokenClass::Reserved,
        }
    }

    /// The fixed spelling of a reserved token, or `None` for literals,
    /// identifiers and EOF.
    pub const fn fixed_text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Newline => "\n",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Semicolon => ";",
            TokenKind::LtEq => "<=",
            TokenKind::Lt => "<",
            TokenKind::GtEq => ">=",
            TokenKind::Gt => ">",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Eq => "=",
            TokenKind::Up => "up",
            TokenKind::Down => "down",
            TokenKind::Left => "left",
            TokenKind::Right => "right",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::Do => "do",
            TokenKind::End => "end",
            TokenKind::MovementList => "movement_list",
            TokenKind::Int(_) | TokenKind::Ident(_) | TokenKind::Eof => return None,
        };
        Some(text)
    }

    /// The direction named by a movement keyword.
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            TokenKind::Up => Some(Direction::Up),
            TokenKind::Down => Some(Direction::Down),
            TokenKind::Left => Some(Direction::Left),
            TokenKind::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Whether this token ends a statement (`;` or newline).
    #[inline]
    pub const fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Semicolon | TokenKind::Newline)
    }

    /// Short human-readable description for error messages.
    ///
    /// Identifiers and integers are described by class only; callers that
    /// have the source or interner at hand add the text themselves.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Ident(_) => "identifier".to_string(),
            TokenKind::Newline => "newline".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("`{}`", other.fixed_text().unwrap_or_default()),
        }
    }
}

/// Lexer output: tokens in source order, terminated by an `Eof` token.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// All tokens as a slice, including the trailing `Eof`.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The tokens produced from source text, without the `Eof` sentinel.
    pub fn source_tokens(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.kind == TokenKind::Eof => rest,
            _ => &self.tokens,
        }
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
