//! IDE features: high-level query APIs for editor integrations.
//!
//! This module provides the interface between the design model (HIR)
//! and an editor front end. Each function answers one editor request.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take data in, return data out
//! 2. **No protocol types**: Uses our own types, converted at the boundary
//! 3. **Composable**: Built on top of HIR queries
//!
//! The recommended way to use this module is through [`AnalysisHost`].

mod analysis;
mod goto;
mod references;
mod symbols;

pub use analysis::{Analysis, AnalysisHost, IndexHandle};
pub use goto::{GotoResult, GotoTarget, enclosing_module, goto_module_definition};
pub use references::{Reference, ReferenceResult, find_instantiations};
pub use symbols::{ModuleSymbol, document_modules, module_symbols};
