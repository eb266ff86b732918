//! Offset to line/column conversion.

use super::{FileId, Position, SourceLocation, Span, TextRange, TextSize};

/// Precomputed line-start table for one text buffer.
///
/// Built once per file parse; lookups are a binary search over line starts.
/// Sanitizing and preprocessing never add or remove newlines, so an index
/// built from the processed text addresses the original file exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| TextSize::new(i as u32 + 1)),
        );
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Number of lines (a trailing newline opens a final empty line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a 0-indexed position. Offsets past the end
    /// clamp to the end of the text.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line];
        Position::new(line, u32::from(column) as usize)
    }

    /// Convert a byte range to a span.
    pub fn span(&self, range: TextRange) -> Span {
        Span::new(self.position(range.start()), self.position(range.end()))
    }

    /// Convert a byte range to a location in `file`.
    pub fn location(&self, file: FileId, range: TextRange) -> SourceLocation {
        SourceLocation::new(file, self.span(range))
    }

    /// Convert a position back to a byte offset, if it lies within the text.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        let start = *self.line_starts.get(position.line)?;
        let line_end = self
            .line_starts
            .get(position.line + 1)
            .copied()
            .unwrap_or(self.len);
        let offset = start + TextSize::new(position.column as u32);
        (offset <= line_end).then_some(offset)
    }
}
