use crate::error::SizeError;
use crate::types::{EntryKind, TraversalPolicy};
use log::debug;
use std::fs::{self, Metadata};
use std::path::Path;

/// Look up a path without following symlinks.
pub fn lstat(path: &Path) -> Result<(EntryKind, Metadata), SizeError> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SizeError::metadata(path, e))?;
    Ok((EntryKind::from_file_type(metadata.file_type()), metadata))
}

/// Logical size of a file as a signed byte count.
pub fn logical_len(metadata: &Metadata) -> i64 {
    i64::try_from(metadata.len()).unwrap_or(i64::MAX)
}

/// Sum the regular files directly inside a directory.
///
/// Subdirectories and symlinks are skipped, as are hidden children unless the
/// policy includes them. Children whose metadata cannot be read count as zero.
pub fn shallow_dir_size(path: &Path, policy: TraversalPolicy) -> Result<i64, SizeError> {
    let entries = fs::read_dir(path).map_err(|e| SizeError::unreadable(path, e))?;
    let mut total_size = 0i64;

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!("Skipped entry in {}: {}", path.display(), e);
                continue;
            }
        };

        if !policy.admits(&entry.file_name()) {
            continue;
        }

        // DirEntry::file_type does not follow symlinks
        let is_file = match entry.file_type() {
            Ok(t) => EntryKind::from_file_type(t) == EntryKind::File,
            Err(e) => {
                debug!("Skipped {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if !is_file {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => total_size += logical_len(&metadata),
            Err(e) => debug!("Skipped {}: {}", entry.path().display(), e),
        }
    }

    Ok(total_size)
}
