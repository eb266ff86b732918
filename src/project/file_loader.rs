//! Reading source files for a scan.

use std::fs;
use std::path::Path;

use crate::core::LoadError;

/// Read `path` as UTF-8, refusing files larger than `max_bytes`.
///
/// The size is checked from metadata before the content is read, so an
/// oversized file is never loaded into memory.
pub fn load_file(path: &Path, max_bytes: u64) -> Result<String, LoadError> {
    let io_error = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_error)?.len();
    if size > max_bytes {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_bytes,
        });
    }

    let bytes = fs::read(path).map_err(io_error)?;
    String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8 {
        path: path.to_path_buf(),
    })
}
