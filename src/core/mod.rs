//! Shared helpers: identifier scanning and the crate's error types.

pub mod error;
pub mod text_utils;

pub use error::{ConfigError, LoadError};
