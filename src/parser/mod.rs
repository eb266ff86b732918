//! Structural extractor: module spans, ports and instantiations.
//!
//! This is not a grammar. It runs over text that has already been
//! sanitized and preprocessed, finds module headers with line-anchored
//! patterns, and walks the few constructs it cares about with bounded
//! bracket matching. Anything it cannot make sense of is skipped.
//!
//! ```text
//! processed text
//!     ↓
//! module headers (line-start `module NAME`)
//!     ↓
//! per module: header ports → body declarations → instances
//!     ↓
//! Vec<ModuleSyntax> (byte ranges, lowered by `hir`)
//! ```

mod instance;
pub mod keywords;
mod module;
mod ports;
mod scan;
mod syntax;

pub use keywords::{DEFAULT_DENYLIST, KeywordDenylist};
pub use syntax::{BindingSyntax, InstanceSyntax, ModuleSyntax, PortDirection, PortSyntax};

/// Extract every module in `text`, in source order.
///
/// `text` must be the output of [`crate::syntax::sanitize`] (and usually
/// [`crate::syntax::preprocess`]) so comments and strings cannot produce
/// false matches.
pub fn parse_structure(text: &str, denylist: &KeywordDenylist) -> Vec<ModuleSyntax> {
    module::find_modules(text, denylist)
}
