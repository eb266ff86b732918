//! Go-to-definition for module names.

use std::sync::Arc;

use crate::base::{FileId, Position, SourceLocation};
use crate::core::text_utils::extract_word_at_cursor;
use crate::hir::{DesignIndex, ModuleDefinition};

/// Result of a go-to-definition request.
#[derive(Clone, Debug, Default)]
pub struct GotoResult {
    /// The targets to jump to.
    pub targets: Vec<GotoTarget>,
}

impl GotoResult {
    /// Create an empty result (no targets found).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A module definition to jump to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GotoTarget {
    pub name: Arc<str>,
    pub location: SourceLocation,
}

impl From<&ModuleDefinition> for GotoTarget {
    fn from(module: &ModuleDefinition) -> Self {
        Self {
            name: module.name.clone(),
            location: module.location,
        }
    }
}

/// Resolve the word under the cursor to module definitions.
///
/// # Arguments
/// * `index` - The design index to search
/// * `source` - Text of the file containing the cursor
/// * `position` - Cursor position (0-indexed line, byte column)
///
/// Every definition sharing the name is returned, in discovery order.
pub fn goto_module_definition(
    index: &DesignIndex,
    source: &str,
    position: Position,
) -> GotoResult {
    let Some(line) = source.lines().nth(position.line) else {
        return GotoResult::empty();
    };
    let Some(word) = extract_word_at_cursor(line, position.column) else {
        return GotoResult::empty();
    };
    GotoResult {
        targets: index
            .modules_named(&word)
            .into_iter()
            .map(GotoTarget::from)
            .collect(),
    }
}

/// The definition of the module containing `position`, if any.
pub fn enclosing_module(
    index: &DesignIndex,
    file: FileId,
    position: Position,
) -> Option<GotoTarget> {
    index.module_at(file, position).map(GotoTarget::from)
}
