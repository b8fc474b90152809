//! Source location tracking.
//!
//! Spans are byte ranges. Grammar spans index into the annotated text;
//! the matcher's offset map turns them back into ranges of the caller's text.

/// A half-open byte range of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates an empty span at an offset.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Creates a span covering the range from this span to another.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
        }
    }

    /// Returns the length of this span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the text this span covers, or `""` if it is not a valid
    /// range of `source`.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_to() {
        let combined = Span::new(0, 4).to(Span::new(5, 9));
        assert_eq!(combined, Span::new(0, 9));
        assert_eq!(combined.len(), 9);
    }

    #[test]
    fn span_at_is_empty() {
        assert!(Span::at(3).is_empty());
        assert!(!Span::new(3, 4).is_empty());
    }

    #[test]
    fn span_text() {
        let source = "John 3:16";
        assert_eq!(Span::new(5, 9).text(source), "3:16");
        assert_eq!(Span::new(5, 40).text(source), "");
    }
}
