//! Diagnostic emitters.
//!
//! Only the human-readable terminal format is provided.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in different formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}
