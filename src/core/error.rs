//! Error types for the outer layers.
//!
//! The indexing core never fails: malformed source degrades to a partial
//! result. Errors only arise at the file-read and configuration boundaries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a source file for a scan.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error during read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("{path} is {size} bytes, over the {limit} byte limit")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    /// File content is not valid UTF-8.
    #[error("{path} is not valid UTF-8")]
    NotUtf8 { path: PathBuf },
}

impl LoadError {
    /// The file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::TooLarge { path, .. }
            | LoadError::NotUtf8 { path } => path,
        }
    }
}

/// Errors that can occur while reading scan configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or an unknown enum value.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed but out-of-range value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}
