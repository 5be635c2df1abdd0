//! Lexer error type.
//!
//! - WHERE: `span` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - HOW: `suggestion`, for characters that commonly come from other languages

use seek_diagnostic::{Diagnostic, ErrorCode};
use seek_ir::Span;

/// A lexer error. Lexing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
    pub suggestion: Option<&'static str>,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No rule matches at this character.
    #[error("unrecognized character `{found}`")]
    UnrecognizedChar { found: char },

    /// Decimal literal does not fit in `i64`.
    #[error("integer literal `{literal}` is too large")]
    IntegerTooLarge { literal: String },

    /// Source is longer than a span offset can address.
    #[error("source is {len} bytes; at most 4294967295 are supported")]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// No rule matched at byte offset `pos`.
    pub(crate) fn unrecognized(source: &str, pos: usize) -> Self {
        let found = source[pos..].chars().next().unwrap_or('\u{FFFD}');
        LexError {
            span: Span::from_range(pos..pos + found.len_utf8()),
            kind: LexErrorKind::UnrecognizedChar { found },
            suggestion: foreign_operator_hint(found),
        }
    }

    pub(crate) fn integer_too_large(span: Span, literal: &str) -> Self {
        LexError {
            span,
            kind: LexErrorKind::IntegerTooLarge {
                literal: literal.to_string(),
            },
            suggestion: None,
        }
    }

    pub(crate) fn source_too_large(len: usize) -> Self {
        LexError {
            span: Span::DUMMY,
            kind: LexErrorKind::SourceTooLarge { len },
            suggestion: Some("split the program into smaller files"),
        }
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnrecognizedChar { .. } => ErrorCode::E0001,
            LexErrorKind::IntegerTooLarge { .. } => ErrorCode::E0002,
            LexErrorKind::SourceTooLarge { .. } => ErrorCode::E0003,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnrecognizedChar { .. } => "not valid in seek_lang",
            LexErrorKind::IntegerTooLarge { .. } => "exceeds 9223372036854775807",
            LexErrorKind::SourceTooLarge { .. } => "source starts here",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        match self.suggestion {
            Some(help) => diag.with_suggestion(help),
            None => diag,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}

/// Hints for operators borrowed from C-family languages.
fn foreign_operator_hint(c: char) -> Option<&'static str> {
    match c {
        '!' => Some("use `not` for negation, or `!=` for inequality"),
        '&' => Some("use `and` for logical conjunction"),
        '|' => Some("use `or` for logical disjunction"),
        '{' | '}' => Some("blocks are written `do ... end`"),
        '%' => Some("seek_lang has no remainder operator"),
        _ => None,
    }
}
