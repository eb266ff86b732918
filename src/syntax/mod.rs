//! Text-level passes that run before structural extraction.
//!
//! Both passes preserve byte length and every newline offset, so a
//! [`LineIndex`](crate::base::LineIndex) built over their output addresses
//! the original file exactly.
//!
//! ```text
//! raw text → sanitize → preprocess(defines) → parser
//! ```

mod defines;
mod preprocess;
mod sanitize;

pub use defines::DefineSet;
pub use preprocess::preprocess;
pub use sanitize::sanitize;
