//! Source location spans.

use std::fmt;

/// Byte range into the program text.
///
/// - start: u32 - byte offset from the start of the program
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Dummy span for synthesized nodes.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create from a byte range.
    ///
    /// # Panics
    /// Panics if the range exceeds `u32::MAX` bytes. The lexer rejects such
    /// sources up front, so spans built from its offsets always fit.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        Span {
            start: u32::try_from(range.start)
                .unwrap_or_else(|_| panic!("span start {} exceeds u32::MAX", range.start)),
            end: u32::try_from(range.end)
                .unwrap_or_else(|_| panic!("span end {} exceeds u32::MAX", range.end)),
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Convert to a `std::ops::Range` for slicing the source.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
