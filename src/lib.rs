//! # veriscan-base
//!
//! Structural indexing of Verilog/SystemVerilog source trees: modules,
//! ports, instances, the instantiation hierarchy and direct connections
//! between sibling instances, without a full compiler front end.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → AnalysisHost, symbols, goto-definition, instantiations
//!   ↓
//! project   → ScanConfig, file loading, filelist defines
//!   ↓
//! hir       → Design model, DesignIndex, hierarchy, connections
//!   ↓
//! parser    → Structural extractor (modules, ports, instances)
//!   ↓
//! syntax    → Sanitizer and preprocessor
//!   ↓
//! core      → Text helpers and error types
//!   ↓
//! base      → Primitives (FileId, LineIndex, Position, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → core → syntax → parser → hir → project → ide)
// ============================================================================

/// Foundation types: FileId, LineIndex, Position, Span
pub mod base;

/// Identifier helpers and error types
pub mod core;

/// Sanitizer and preprocessor: length-preserving text passes
pub mod syntax;

/// Structural extractor over processed text
pub mod parser;

/// Design model: index, hierarchy, connection analysis, scan pipeline
pub mod hir;

/// Editor queries over index snapshots
pub mod ide;

/// Project management: settings, file loading, initial defines
pub mod project;

// Re-export commonly needed items
pub use parser::keywords;

// Re-export foundation types
pub use base::{FileId, LineIndex, Position, SourceLocation, Span, TextRange, TextSize};

pub use crate::core::{ConfigError, LoadError};
pub use hir::{
    ConnectionMatch, DesignIndex, DuplicateResolution, Hierarchy, HierarchyNode,
    HierarchyNodeKind, HierarchyOptions, ModuleDefinition,
};
pub use ide::{Analysis, AnalysisHost};
pub use project::{ScanConfig, WorkspaceLoader};
pub use syntax::DefineSet;
