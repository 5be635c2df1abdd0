//! Embedded error documentation for `seek explain`.
//!
//! Each error code has a markdown file in this directory that explains the
//! error and shows how to fix it. The files are embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `EXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Lexer errors (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    (ErrorCode::E0003, include_str!("E0003.md")),
    // Parser errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
    (ErrorCode::E1004, include_str!("E1004.md")),
    (ErrorCode::E1005, include_str!("E1005.md")),
    (ErrorCode::E1006, include_str!("E1006.md")),
    (ErrorCode::E1007, include_str!("E1007.md")),
    (ErrorCode::E1008, include_str!("E1008.md")),
    // Evaluation errors (E2xxx)
    (ErrorCode::E2001, include_str!("E2001.md")),
    (ErrorCode::E2002, include_str!("E2002.md")),
    (ErrorCode::E2003, include_str!("E2003.md")),
    (ErrorCode::E2004, include_str!("E2004.md")),
    (ErrorCode::E2005, include_str!("E2005.md")),
    (ErrorCode::E2006, include_str!("E2006.md")),
];
