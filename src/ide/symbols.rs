//! Module listing for the workspace quick-pick and the document outline.

use std::sync::Arc;

use crate::base::{FileId, SourceLocation};
use crate::hir::{DesignIndex, ModuleDefinition};

/// A module entry for a symbol list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSymbol {
    pub name: Arc<str>,
    pub file: FileId,
    /// The `module NAME` span.
    pub location: SourceLocation,
    /// The whole definition, for outline folding.
    pub extent: SourceLocation,
    pub port_count: usize,
    pub instance_count: usize,
}

impl ModuleSymbol {
    pub fn from_module(module: &ModuleDefinition) -> Self {
        Self {
            name: module.name.clone(),
            file: module.file,
            location: module.location,
            extent: module.extent,
            port_count: module.ports.len(),
            instance_count: module.instances.len(),
        }
    }
}

/// Every module definition in the workspace, optionally filtered.
///
/// # Arguments
/// * `index` - The design index to search
/// * `query` - Optional search query (case-insensitive substring match)
///
/// # Returns
/// Matching definitions sorted by name. Duplicates of one name stay in
/// discovery order.
pub fn module_symbols(index: &DesignIndex, query: Option<&str>) -> Vec<ModuleSymbol> {
    let query_lower = query.map(str::to_lowercase);

    let mut results: Vec<ModuleSymbol> = index
        .modules()
        .iter()
        .filter(|module| match &query_lower {
            Some(q) => module.name.to_lowercase().contains(q.as_str()),
            None => true,
        })
        .map(ModuleSymbol::from_module)
        .collect();

    // Stable sort keeps discovery order among equal names.
    results.sort_by(|a, b| a.name.cmp(&b.name));
    results
}

/// Modules declared in `file`, in source order.
pub fn document_modules(index: &DesignIndex, file: FileId) -> Vec<ModuleSymbol> {
    index
        .modules_in_file(file)
        .into_iter()
        .map(ModuleSymbol::from_module)
        .collect()
}
