use std::fmt;

/// Error codes for all seek_lang diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character in source
    E0001,
    /// Integer literal does not fit in 64 bits
    E0002,
    /// Source too long for `u32` span offsets
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Block is missing its closing `end`
    E1003,
    /// Statement not followed by `;` or newline
    E1004,
    /// Expected statement
    E1005,
    /// Assignment to `movement_list`
    E1006,
    /// `movement_list` read as a value
    E1007,
    /// Movement keyword used as a value
    E1008,

    // Evaluation Errors (E2xxx)
    /// Variable read before assignment
    E2001,
    /// Division by zero
    E2002,
    /// Negative `for` count
    E2003,
    /// Integer overflow
    E2004,
    /// Execution-step budget exceeded
    E2005,
    /// Assignment to a read-only position variable
    E2006,
}

impl ErrorCode {
    /// All codes, in numeric order.
    pub const ALL: [ErrorCode; 17] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
    ];

    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            // Evaluation
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
        }
    }

    /// Parse a code such as `"E2003"` (case-insensitive).
    pub fn parse(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
