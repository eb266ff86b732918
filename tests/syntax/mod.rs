//! Syntax layer tests
//!
//! Length-preserving text passes:
//! - Sanitizer (comments, strings, attributes)
//! - Preprocessor (conditional compilation)

pub mod tests_preprocess;
pub mod tests_sanitize;
