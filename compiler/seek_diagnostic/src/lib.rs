//! Diagnostic system for seek_lang error reporting.
//!
//! Every phase error (lex, parse, eval) converts into a [`Diagnostic`]:
//! - Error code for searchability (`seek explain E2003`)
//! - Clear message (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes and suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
