//! Scan configuration as read from editor settings JSON.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::hir::{DuplicateResolution, HierarchyOptions};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// User-facing scan settings.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanConfig {
    /// Run conditional compilation before extraction.
    pub enable_preprocess: bool,
    /// Deepest level expanded before a node becomes a depth-limit terminal.
    pub max_hierarchy_depth: usize,
    /// How instances of a duplicated module name are expanded.
    pub hierarchy_resolve: DuplicateResolution,
    /// Single root for the hierarchy. Empty means "compute roots".
    pub hierarchy_top_module: String,
    /// Files larger than this are skipped by the loader.
    #[serde(rename = "maxFileSizeMB")]
    pub max_file_size_mb: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            enable_preprocess: true,
            max_hierarchy_depth: 20,
            hierarchy_resolve: DuplicateResolution::All,
            hierarchy_top_module: String::new(),
            max_file_size_mb: 10,
        }
    }
}

impl ScanConfig {
    /// Parse and validate a JSON settings object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScanConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate an already-decoded settings value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: ScanConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hierarchy_depth == 0 {
            return Err(ConfigError::InvalidValue {
                key: "maxHierarchyDepth",
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_file_size_mb == 0 {
            return Err(ConfigError::InvalidValue {
                key: "maxFileSizeMB",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The top module, if one is configured.
    pub fn top_module(&self) -> Option<&str> {
        let top = self.hierarchy_top_module.trim();
        (!top.is_empty()).then_some(top)
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn hierarchy_options(&self) -> HierarchyOptions {
        HierarchyOptions {
            max_depth: self.max_hierarchy_depth,
            resolve: self.hierarchy_resolve,
            top_module: self.top_module().map(str::to_string),
        }
    }
}
