use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ScanConfig;
use super::file_loader;
use crate::core::LoadError;
use crate::ide::AnalysisHost;

/// Outcome of loading a list of files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files added to the host, in load order.
    pub loaded: Vec<PathBuf>,
    /// Files that could not be read; they were skipped.
    pub failed: Vec<LoadError>,
}

impl LoadReport {
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Loads an explicit, caller-ordered list of source files.
///
/// File discovery (globs, directory walks) is left to the caller; the order
/// of the list is the order defines are threaded through the scan.
#[derive(Debug, Clone)]
pub struct WorkspaceLoader {
    max_file_size: u64,
}

impl Default for WorkspaceLoader {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

impl WorkspaceLoader {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.max_file_size_bytes())
    }

    /// Loads every path into `host`, skipping files that fail to read.
    pub fn load_into_host<I, P>(&self, paths: I, host: &mut AnalysisHost) -> LoadReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = LoadReport::default();
        for path in paths {
            let path = path.as_ref();
            match file_loader::load_file(path, self.max_file_size) {
                Ok(text) => {
                    debug!("loaded {} ({} bytes)", path.display(), text.len());
                    host.set_file_content(path, text);
                    report.loaded.push(path.to_path_buf());
                }
                Err(e) => {
                    warn!("skipping {}", e);
                    report.failed.push(e);
                }
            }
        }
        report
    }
}
