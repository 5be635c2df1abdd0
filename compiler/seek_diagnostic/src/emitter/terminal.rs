//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. When the
//! source text is attached, labels render as `path:line:col` plus the source
//! line with a caret underline; otherwise they fall back to byte ranges.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` value.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text attached to an emitter for snippet rendering.
struct SourceInfo<'s> {
    text: &'s str,
    path: Option<String>,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceInfo<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach source text so labels render with line/column and a snippet.
    #[must_use]
    pub fn with_source(mut self, text: &'s str) -> Self {
        self.source = Some(SourceInfo {
            text,
            path: None,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    /// Set the file path shown in location headers. Requires `with_source`.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        if let Some(source) = &mut self.source {
            source.path = Some(path.into());
        }
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_level(&mut self) {
        self.write_colored("error", colors::ERROR);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    /// `--> 0..3: message`
    fn write_label_plain(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
        self.write_colored(&label.message, Self::label_color(label));
        let _ = writeln!(self.writer);
    }

    /// ```text
    ///   --> prog.seek:2:5
    ///    |
    ///  2 | x = @
    ///    |     ^ message
    /// ```
    fn write_label_snippet(&mut self, label: &Label, source: &SourceInfo<'_>) {
        let (line, col) = source.lines.offset_to_line_col(source.text, label.span.start);
        let line_text = source.lines.line_text(source.text, line).unwrap_or("");
        let gutter = line.to_string().len();

        let _ = write!(self.writer, "{:gutter$}--> ", "");
        if let Some(path) = &source.path {
            let _ = write!(self.writer, "{path}:");
        }
        let _ = writeln!(self.writer, "{line}:{col}");
        let _ = writeln!(self.writer, "{:gutter$} |", "");
        let _ = writeln!(self.writer, "{line} | {line_text}");

        // Underline at least one column, never past the end of the line.
        let line_chars = line_text.chars().count();
        let start_col = (col as usize).saturating_sub(1);
        let span_chars = source
            .text
            .get(label.span.to_range())
            .map_or(0, |s| s.chars().take_while(|&c| c != '\n').count());
        let width = span_chars
            .min(line_chars.saturating_sub(start_col))
            .max(1);

        let _ = write!(self.writer, "{:gutter$} | {:start_col$}", "", "");
        let carets = "^".repeat(width);
        let color = Self::label_color(label);
        self.write_colored(&carets, color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }

    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_level();
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        let source = self.source.take();
        for label in &diagnostic.labels {
            match &source {
                Some(source) => self.write_label_snippet(label, source),
                None => self.write_label_plain(label),
            }
        }
        self.source = source;

        for note in &diagnostic.notes {
            self.write_trailer("note", colors::BOLD, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.write_trailer("help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
