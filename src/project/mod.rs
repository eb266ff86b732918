//! Project layer: settings, file reading and initial defines.

mod config;
pub mod file_loader;
pub mod filelist;
pub mod workspace_loader;

pub use config::ScanConfig;
pub use filelist::parse_defines;
pub use workspace_loader::{LoadReport, WorkspaceLoader};
