//! Project layer tests
//!
//! - Settings JSON
//! - Loading caller-ordered file lists from disk
//! - Filelist defines
