//! IDE layer tests
//!
//! Editor queries over analysis snapshots:
//! - Host lifecycle (edits, rebuilds, settings)
//! - Goto definition and instantiation lookup
//! - Module symbols

pub mod tests_analysis;
pub mod tests_navigation;
