use super::{FileId, Position, Span};

/// A span anchored in a specific file.
///
/// Consumers resolve the file through `DesignIndex::file_path` to open the
/// exact position in an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: FileId,
    pub span: Span,
}

impl SourceLocation {
    pub fn new(file: FileId, span: Span) -> Self {
        Self { file, span }
    }

    pub fn start(&self) -> Position {
        self.span.start
    }

    pub fn end(&self) -> Position {
        self.span.end
    }
}
