//! AnalysisHost and Analysis: state management for editor queries.
//!
//! The `AnalysisHost` owns all mutable state and hands out `Analysis`
//! snapshots for querying. A snapshot holds an `Arc` of the index it was
//! taken from, so it stays consistent while the host keeps changing.
//!
//! ## Usage
//!
//! ```
//! use veriscan::base::FileId;
//! use veriscan::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("top.v", "module top;\n  sub u0 (.a(x));\nendmodule\n");
//! host.set_file_content("sub.v", "module sub (input a);\nendmodule\n");
//!
//! let analysis = host.analysis();
//! let hierarchy = analysis.hierarchy();
//! assert_eq!(&*hierarchy.roots[0].module_name, "top");
//! assert_eq!(analysis.document_modules(FileId::new(1)).len(), 1);
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::info;

use crate::base::{FileId, Position};
use crate::hir::{
    ConnectionMatch, DesignIndex, Hierarchy, HierarchyOptions, ScanOptions, build_hierarchy,
    connections_with_all, find_connections, scan,
};
use crate::parser::KeywordDenylist;
use crate::project::ScanConfig;
use crate::syntax::DefineSet;

use super::{
    GotoResult, GotoTarget, ModuleSymbol, ReferenceResult, document_modules, enclosing_module,
    find_instantiations, goto_module_definition, module_symbols,
};

/// Shared handle to the most recently published index.
///
/// Readers on other threads take a snapshot and never observe a partially
/// built index; the host swaps in a whole new `Arc` after each rebuild.
#[derive(Clone, Debug, Default)]
pub struct IndexHandle {
    current: Arc<RwLock<Arc<DesignIndex>>>,
}

impl IndexHandle {
    pub fn snapshot(&self) -> Arc<DesignIndex> {
        self.current.read().clone()
    }

    fn publish(&self, index: Arc<DesignIndex>) {
        *self.current.write() = index;
    }
}

/// Owns all mutable state for the editor layer.
///
/// Apply changes via `set_file_content()` and `remove_file()`,
/// then get a consistent snapshot via `analysis()`.
pub struct AnalysisHost {
    /// File texts in scan order. Insertion order is the order defines are
    /// threaded through.
    files: IndexMap<PathBuf, Arc<str>>,
    config: ScanConfig,
    /// Defines in effect before the first file.
    defines: DefineSet,
    denylist: KeywordDenylist,
    index: Arc<DesignIndex>,
    /// File texts at the last rebuild, indexed by `FileId`.
    sources: Arc<[Arc<str>]>,
    handle: IndexHandle,
    /// Whether the index needs rebuilding
    index_dirty: bool,
    generation: u64,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    /// Create a new empty AnalysisHost with default settings.
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            files: IndexMap::new(),
            config,
            defines: DefineSet::new(),
            denylist: KeywordDenylist::default(),
            index: Arc::new(DesignIndex::new()),
            sources: Arc::from(Vec::new()),
            handle: IndexHandle::default(),
            index_dirty: false,
            generation: 0,
        }
    }

    /// Set the content of a file. A new path is appended to the scan order;
    /// an existing path keeps its place.
    pub fn set_file_content(&mut self, path: impl Into<PathBuf>, content: impl Into<Arc<str>>) {
        self.files.insert(path.into(), content.into());
        self.index_dirty = true;
    }

    /// Remove a file, keeping the order of the others.
    pub fn remove_file(&mut self, path: &Path) -> bool {
        let removed = self.files.shift_remove(path).is_some();
        self.index_dirty |= removed;
        removed
    }

    pub fn has_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// File paths in scan order.
    pub fn file_paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Replace the settings. Only a change to preprocessing invalidates the
    /// index; hierarchy settings are read at query time.
    pub fn set_config(&mut self, config: ScanConfig) {
        if config.enable_preprocess != self.config.enable_preprocess {
            self.index_dirty = true;
        }
        self.config = config;
    }

    /// Replace the defines in effect before the first file.
    pub fn set_defines(&mut self, defines: DefineSet) {
        self.defines = defines;
        self.index_dirty = true;
    }

    pub fn set_denylist(&mut self, denylist: KeywordDenylist) {
        self.denylist = denylist;
        self.index_dirty = true;
    }

    /// Mark the index as needing rebuild (call after external changes).
    pub fn mark_dirty(&mut self) {
        self.index_dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.index_dirty
    }

    /// Number of rebuilds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle that always yields the latest published index.
    pub fn index_handle(&self) -> IndexHandle {
        self.handle.clone()
    }

    /// Rebuild the design index from the current files.
    ///
    /// This is called automatically by `analysis()` if the index is dirty.
    pub fn rebuild_index(&mut self) {
        let options = ScanOptions {
            preprocess: self.config.enable_preprocess,
            denylist: self.denylist.clone(),
        };
        let files = self.files.iter().map(|(path, text)| (path.clone(), &**text));
        let index = Arc::new(scan(files, &self.defines, &options));

        info!(
            "indexed {} module(s) from {} file(s), {} ambiguous name(s)",
            index.module_count(),
            index.file_count(),
            index.duplicate_names().len()
        );

        self.sources = self.files.values().cloned().collect();
        self.index = index.clone();
        self.handle.publish(index);
        self.index_dirty = false;
        self.generation += 1;
    }

    /// Get a consistent snapshot for querying.
    ///
    /// If the index is dirty, it will be rebuilt first.
    pub fn analysis(&mut self) -> Analysis {
        if self.index_dirty {
            self.rebuild_index();
        }

        Analysis {
            index: self.index.clone(),
            sources: self.sources.clone(),
            options: self.config.hierarchy_options(),
        }
    }
}

/// Immutable snapshot for querying.
///
/// Cheap to clone and safe to send to another thread.
#[derive(Clone, Debug)]
pub struct Analysis {
    index: Arc<DesignIndex>,
    sources: Arc<[Arc<str>]>,
    options: HierarchyOptions,
}

impl Analysis {
    pub fn design_index(&self) -> &DesignIndex {
        &self.index
    }

    pub fn file_id(&self, path: &Path) -> Option<FileId> {
        self.index.file_id(path)
    }

    pub fn file_path(&self, file: FileId) -> Option<&Path> {
        self.index.file_path(file)
    }

    /// Text of `file` as it was scanned.
    pub fn source(&self, file: FileId) -> Option<&str> {
        self.sources.get(file.index()).map(|s| &**s)
    }

    /// Build the instantiation tree with the host's settings.
    pub fn hierarchy(&self) -> Hierarchy {
        self.hierarchy_with(&self.options)
    }

    /// Build the instantiation tree with explicit settings.
    pub fn hierarchy_with(&self, options: &HierarchyOptions) -> Hierarchy {
        build_hierarchy(Some(&self.index), options)
    }

    /// Nets shared by two sibling instances of `parent`.
    pub fn connections(&self, parent: &str, left: &str, right: &str) -> Vec<ConnectionMatch> {
        find_connections(&self.index, parent, left, right)
    }

    /// Nets shared by `instance` and each of its siblings.
    pub fn connections_with_all(
        &self,
        parent: &str,
        instance: &str,
    ) -> Vec<(Arc<str>, Vec<ConnectionMatch>)> {
        connections_with_all(&self.index, parent, instance)
    }

    pub fn module_symbols(&self, query: Option<&str>) -> Vec<ModuleSymbol> {
        module_symbols(&self.index, query)
    }

    pub fn document_modules(&self, file: FileId) -> Vec<ModuleSymbol> {
        document_modules(&self.index, file)
    }

    pub fn goto_module_definition(&self, file: FileId, position: Position) -> GotoResult {
        match self.source(file) {
            Some(source) => goto_module_definition(&self.index, source, position),
            None => GotoResult::empty(),
        }
    }

    pub fn enclosing_module(&self, file: FileId, position: Position) -> Option<GotoTarget> {
        enclosing_module(&self.index, file, position)
    }

    pub fn find_instantiations(
        &self,
        module: &str,
        include_declaration: bool,
    ) -> ReferenceResult {
        find_instantiations(&self.index, module, include_declaration)
    }

    /// Names defined more than once, with their definition counts.
    pub fn duplicate_names(&self) -> Vec<(&str, usize)> {
        self.index.duplicate_names()
    }
}
