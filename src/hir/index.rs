//! The design index: every module from one scan, keyed by name and file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use super::model::{InstanceReference, ModuleDefinition};
use crate::base::{FileId, Position};

/// Index into the module vector.
pub type ModuleIdx = usize;

/// Immutable snapshot of all modules found by one scan.
///
/// Modules are stored once in discovery order and referenced by index from
/// the lookup maps. Several definitions may share a name (duplicate files,
/// variants behind `` `ifdef``); they are all kept, in discovery order, and
/// callers choose how to resolve them.
#[derive(Clone, Debug, Default)]
pub struct DesignIndex {
    /// File table, indexed by `FileId`.
    files: Vec<PathBuf>,
    file_ids: FxHashMap<PathBuf, FileId>,
    /// The single source of truth for all modules.
    modules: Vec<ModuleDefinition>,
    /// Index by name -> module indices (IndexMap preserves discovery order).
    by_name: IndexMap<Arc<str>, Vec<ModuleIdx>>,
    /// Index by file -> module indices.
    by_file: FxHashMap<FileId, Vec<ModuleIdx>>,
    /// Every module type named by some instance.
    instantiated: FxHashSet<Arc<str>>,
}

impl DesignIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a file table and the modules found in those
    /// files, in scan order.
    pub fn from_modules(files: Vec<PathBuf>, modules: Vec<ModuleDefinition>) -> Self {
        let file_ids = files
            .iter()
            .enumerate()
            .map(|(i, path)| (path.clone(), FileId::from(i)))
            .collect();

        let mut by_name: IndexMap<Arc<str>, Vec<ModuleIdx>> = IndexMap::new();
        let mut by_file: FxHashMap<FileId, Vec<ModuleIdx>> = FxHashMap::default();
        let mut instantiated = FxHashSet::default();

        for (idx, module) in modules.iter().enumerate() {
            by_name.entry(module.name.clone()).or_default().push(idx);
            by_file.entry(module.file).or_default().push(idx);
            instantiated.extend(module.instances.iter().map(|i| i.module_type.clone()));
        }

        Self {
            files,
            file_ids,
            modules,
            by_name,
            by_file,
            instantiated,
        }
    }

    /// All modules in discovery order.
    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Distinct module names in discovery order.
    pub fn module_names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.by_name.keys()
    }

    /// All definitions sharing `name`, in discovery order.
    pub fn modules_named(&self, name: &str) -> Vec<&ModuleDefinition> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&i| &self.modules[i]).collect())
            .unwrap_or_default()
    }

    /// The first definition of `name`.
    pub fn module(&self, name: &str) -> Option<&ModuleDefinition> {
        let &idx = self.by_name.get(name)?.first()?;
        self.modules.get(idx)
    }

    pub fn contains_module(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Modules declared in `file`, in source order.
    pub fn modules_in_file(&self, file: FileId) -> Vec<&ModuleDefinition> {
        self.by_file
            .get(&file)
            .map(|indices| indices.iter().map(|&i| &self.modules[i]).collect())
            .unwrap_or_default()
    }

    /// The module whose extent contains `position` in `file`.
    pub fn module_at(&self, file: FileId, position: Position) -> Option<&ModuleDefinition> {
        self.modules_in_file(file)
            .into_iter()
            .find(|m| m.extent.span.contains(position))
    }

    /// Names with more than one definition, with their definition counts.
    pub fn duplicate_names(&self) -> Vec<(&str, usize)> {
        self.by_name
            .iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(name, indices)| (name.as_ref(), indices.len()))
            .collect()
    }

    /// Whether any instance anywhere names `module` as its type.
    pub fn is_instantiated(&self, module: &str) -> bool {
        self.instantiated.contains(module)
    }

    /// Every instance in the index with its enclosing module.
    pub fn instances(&self) -> impl Iterator<Item = (&ModuleDefinition, &InstanceReference)> {
        self.modules
            .iter()
            .flat_map(|m| m.instances.iter().map(move |i| (m, i)))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Path of a scanned file.
    pub fn file_path(&self, file: FileId) -> Option<&Path> {
        self.files.get(file.index()).map(PathBuf::as_path)
    }

    /// Id assigned to a scanned file.
    pub fn file_id(&self, path: &Path) -> Option<FileId> {
        self.file_ids.get(path).copied()
    }
}
