//! High-level IR (HIR): the located design model and everything derived
//! from it.
//!
//! ## Key Types
//!
//! - [`ModuleDefinition`] - A module with its ports and instances
//! - [`DesignIndex`] - Immutable index of every module from one scan
//! - [`Hierarchy`] - The instantiation tree built from an index
//! - [`ConnectionMatch`] - A net shared by two sibling instances
//!
//! ## Pipeline
//!
//! ```text
//! raw text                  ← INPUT: one file, caller-ordered
//!     │
//!     ▼
//! sanitize / preprocess     ← syntax layer, length preserving
//!     │
//!     ▼
//! parse_structure           ← parser layer, byte ranges
//!     │
//!     ▼
//! lower                     ← byte ranges → SourceLocation
//!     │
//!     ▼
//! DesignIndex               ← workspace-wide aggregation
//!     │
//!     ├──▶ build_hierarchy
//!     └──▶ find_connections
//! ```

mod connections;
mod hierarchy;
mod index;
mod lower;
mod model;
mod scan;

pub use connections::{ConnectionMatch, connections_with_all, find_connections};
pub use hierarchy::{
    DuplicateResolution, Hierarchy, HierarchyBuilder, HierarchyNode, HierarchyNodeKind,
    HierarchyOptions, HierarchyStats, build_hierarchy, root_modules,
};
pub use index::{DesignIndex, ModuleIdx};
pub use model::{
    InstanceReference, ModuleDefinition, PortBinding, PortDeclaration, PortDirection,
};
pub use scan::{ScanOptions, scan, scan_file};
