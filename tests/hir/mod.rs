//! HIR layer tests
//!
//! Tests for the design model built from whole workspaces:
//! - Design index aggregation
//! - Hierarchy construction (roots, cycles, depth, duplicates)
//! - Connection analysis

pub mod tests_connections;
pub mod tests_hierarchy;
pub mod tests_index;
