//! Parse error types.
//!
//! - `ParseErrorKind` says what went wrong
//! - `span` says where
//! - `ErrorContext` says what the parser was doing ("while parsing a for loop")

use seek_diagnostic::{Diagnostic, ErrorCode};
use seek_ir::{Direction, Span, Token, TokenKind};

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    /// Parsing an assignment statement.
    Assignment,
    /// Parsing an if statement.
    IfStatement,
    /// Parsing a for loop.
    ForLoop,
    /// Parsing a parenthesized expression.
    Parenthesized,
}

impl ErrorContext {
    /// A phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Assignment => "an assignment",
            Self::IfStatement => "an if statement",
            Self::ForLoop => "a for loop",
            Self::Parenthesized => "a parenthesized expression",
        }
    }
}

/// Which block keyword opened an unclosed block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockOpener {
    If,
    For,
}

impl BlockOpener {
    pub fn keyword(self) -> &'static str {
        match self {
            BlockOpener::If => "if",
            BlockOpener::For => "for",
        }
    }
}

/// Structured parse error kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {}", .found.describe())]
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },

    #[error("expected an expression, found {}", .found.describe())]
    ExpectedExpression { found: TokenKind },

    #[error("`{}` block is missing its closing `end`", .opener.keyword())]
    UnclosedBlock { opener: BlockOpener, opened_at: Span },

    #[error("expected `;` or newline after statement, found {}", .found.describe())]
    MissingTerminator { found: TokenKind },

    #[error("expected a statement, found {}", .found.describe())]
    ExpectedStatement { found: TokenKind },

    #[error("cannot assign to `movement_list`")]
    AssignToMovementList,

    #[error("`movement_list` cannot be read")]
    MovementListRead,

    #[error("movement `{direction}` cannot be used as a value")]
    MovementAsValue { direction: Direction },
}

/// A parse error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    /// `found` does not match what the grammar requires here.
    pub fn unexpected(found: Token, expected: &'static str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.kind,
                expected,
            },
            found.span,
        )
    }

    /// Attach a context unless a more specific one is already set.
    #[must_use]
    pub fn or_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedBlock { .. } => ErrorCode::E1003,
            ParseErrorKind::MissingTerminator { .. } => ErrorCode::E1004,
            ParseErrorKind::ExpectedStatement { .. } => ErrorCode::E1005,
            ParseErrorKind::AssignToMovementList => ErrorCode::E1006,
            ParseErrorKind::MovementListRead => ErrorCode::E1007,
            ParseErrorKind::MovementAsValue { .. } => ErrorCode::E1008,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::UnclosedBlock { .. } => "expected `end` before here".to_string(),
            ParseErrorKind::AssignToMovementList | ParseErrorKind::MovementListRead => {
                "reserved for the move sequence".to_string()
            }
            ParseErrorKind::MovementAsValue { .. } => "movements are statements".to_string(),
            _ => match self.context {
                Some(ctx) => format!("while parsing {}", ctx.description()),
                None => "here".to_string(),
            },
        };

        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);

        match &self.kind {
            ParseErrorKind::UnclosedBlock { opener, opened_at } => {
                diag = diag.with_secondary_label(
                    *opened_at,
                    format!("`{}` block opened here", opener.keyword()),
                );
            }
            ParseErrorKind::AssignToMovementList => {
                diag = diag.with_suggestion("add moves with `up`, `down`, `left` or `right`");
            }
            ParseErrorKind::MovementAsValue { direction } => {
                diag = diag.with_suggestion(format!("write `{direction}` on its own line"));
            }
            ParseErrorKind::MissingTerminator { .. } => {
                diag = diag.with_suggestion("separate statements with `;` or a newline");
            }
            _ => {}
        }
        diag
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)?;
        if let Some(ctx) = self.context {
            write!(f, " (while parsing {})", ctx.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
