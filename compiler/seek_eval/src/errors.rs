//! Evaluation errors and their constructors.
//!
//! Operators and the interpreter build error kinds through the functions
//! below; the interpreter attaches the span of the node being evaluated.

use seek_diagnostic::{Diagnostic, ErrorCode};
use seek_ir::Span;

/// Result of evaluating one node.
pub type EvalResult<T = i64> = Result<T, EvalError>;

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("`for` count must not be negative, got {count}")]
    NegativeLoopCount { count: i64 },

    #[error("integer overflow in {op}")]
    IntegerOverflow { op: &'static str },

    #[error("step budget of {limit} statements exceeded")]
    BudgetExceeded { limit: u64 },

    #[error("cannot assign to read-only variable `{name}`")]
    ReadOnlyVariable { name: String },
}

/// A runtime error located at the node that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E2001,
            EvalErrorKind::DivisionByZero => ErrorCode::E2002,
            EvalErrorKind::NegativeLoopCount { .. } => ErrorCode::E2003,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E2004,
            EvalErrorKind::BudgetExceeded { .. } => ErrorCode::E2005,
            EvalErrorKind::ReadOnlyVariable { .. } => ErrorCode::E2006,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match &self.kind {
            EvalErrorKind::UndefinedVariable { name } => diag
                .with_label(self.span, "read before any assignment")
                .with_suggestion(format!("assign `{name}` before this statement")),
            EvalErrorKind::DivisionByZero => diag.with_label(self.span, "divisor is zero"),
            EvalErrorKind::NegativeLoopCount { .. } => diag
                .with_label(self.span, "loop count evaluated here")
                .with_note("a `for` body runs a fixed number of times, which cannot be negative"),
            EvalErrorKind::IntegerOverflow { .. } => {
                diag.with_label(self.span, "result does not fit in 64 bits")
            }
            EvalErrorKind::BudgetExceeded { .. } => diag
                .with_label(self.span, "budget ran out at this statement")
                .with_suggestion("reduce loop counts or raise the budget with `--budget=N`"),
            EvalErrorKind::ReadOnlyVariable { .. } => diag
                .with_label(self.span, "position variables are read-only")
                .with_suggestion("copy the value into a new variable first"),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.span)
    }
}

impl std::error::Error for EvalError {}

// Operator errors

#[cold]
pub fn division_by_zero() -> EvalErrorKind {
    EvalErrorKind::DivisionByZero
}

#[cold]
pub fn integer_overflow(op: &'static str) -> EvalErrorKind {
    EvalErrorKind::IntegerOverflow { op }
}

// Variable errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalErrorKind {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
}

#[cold]
pub fn read_only_variable(name: &str) -> EvalErrorKind {
    EvalErrorKind::ReadOnlyVariable {
        name: name.to_string(),
    }
}

// Control flow errors

#[cold]
pub fn negative_loop_count(count: i64) -> EvalErrorKind {
    EvalErrorKind::NegativeLoopCount { count }
}

#[cold]
pub fn budget_exceeded(limit: u64) -> EvalErrorKind {
    EvalErrorKind::BudgetExceeded { limit }
}
