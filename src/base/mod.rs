//! Foundation types for veriscan.
//!
//! This module provides fundamental types used throughout the indexer:
//! - [`FileId`] - Compact file identifiers assigned per scan
//! - [`TextRange`], [`TextSize`] - Byte offsets into sanitized source text
//! - [`LineIndex`] - Offset to line/column conversion
//! - [`Position`], [`Span`] - Line/column positions
//! - [`SourceLocation`] - A span anchored in a file
//!
//! This module has NO dependencies on other veriscan modules.

mod file_id;
mod line_index;
mod location;
mod position;

pub use file_id::FileId;
pub use line_index::LineIndex;
pub use location::SourceLocation;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
