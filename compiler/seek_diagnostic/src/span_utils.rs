//! Line and column lookup for spans.
//!
//! [`LineOffsetTable`] pre-computes line starts for O(log L) lookup instead
//! of O(n) scanning.

/// Pre-computed line offset table for line/column lookup.
///
/// # Example
///
/// ```
/// use seek_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "up\nx = 1\ndown";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 7), (2, 5));
/// assert_eq!(table.offset_to_line_col(source, 9), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes, from the start of the line.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let col_text = source.get(line_start..offset).unwrap_or("");
        let col = u32::try_from(col_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    /// Get the byte offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line, without its trailing newline.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_from_offset() {
        let table = LineOffsetTable::build("a\nbb\nccc");
        assert_eq!(table.line_from_offset(0), 1);
        assert_eq!(table.line_from_offset(1), 1); // the '\n' itself
        assert_eq!(table.line_from_offset(2), 2);
        assert_eq!(table.line_from_offset(5), 3);
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let source = "up";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 10), (1, 3));
    }

    #[test]
    fn test_line_text_strips_crlf() {
        let source = "up\r\ndown\r\n";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), Some("up"));
        assert_eq!(table.line_text(source, 2), Some("down"));
        assert_eq!(table.line_text(source, 3), Some(""));
        assert_eq!(table.line_text(source, 4), None);
    }
}
