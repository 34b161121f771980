//! Report the size of a file or directory.
//!
//! [`get_path_size`] is the entry point: it measures a path under a
//! [`TraversalPolicy`] and renders the byte count with [`format_size`].

pub mod error;
pub mod platform;
pub mod scanner;
pub mod types;
pub mod utils;

use std::path::Path;

pub use error::{PathSizeError, SizeError};
pub use scanner::compute_size;
pub use types::{EntryKind, TraversalPolicy};
pub use utils::format_size;

/// Compute and format the size of `path`.
///
/// `recursive` descends into subdirectories, `human` selects KB/MB/... units
/// and `all` includes entries whose name starts with a dot.
pub fn get_path_size(
    path: impl AsRef<Path>,
    recursive: bool,
    human: bool,
    all: bool,
) -> Result<String, PathSizeError> {
    let path = path.as_ref();
    let policy = TraversalPolicy::new(recursive, all);

    let size = compute_size(path, policy).map_err(|source| PathSizeError {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{} bytes under {}", size, path.display());

    Ok(format_size(size, human))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_get_path_size_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("data.bin");
        fs::write(&file_path, [0u8; 1024]).unwrap();

        assert_eq!(get_path_size(&file_path, false, false, false).unwrap(), "1024B");
        assert_eq!(get_path_size(&file_path, false, true, false).unwrap(), "1.0KB");
    }

    #[test]
    fn test_get_path_size_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = get_path_size(&missing, true, true, true).unwrap_err();
        assert_eq!(err.path, missing);
        assert!(matches!(err.source, SizeError::PathNotFound { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
