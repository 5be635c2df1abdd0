//! Command handlers for the `seek` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading sources
//! and reporting errors live here.

use seek_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::SeekError;

mod debug;
mod explain;
mod options;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::{documented_codes, explain_error};
pub use options::{parse_board, parse_position, parse_run_options, RunOptions};
pub use run::{format_replay, run_file};

/// Read a file from disk, exiting with a user-friendly error message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Render `err` to stderr with a source snippet and exit with status 1.
pub(crate) fn report_and_exit(source: &str, path: &str, color: ColorMode, err: &SeekError) -> ! {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let mut emitter = TerminalEmitter::with_color_mode(std::io::stderr(), color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
    std::process::exit(1);
}
