use crate::error::SizeError;
use crate::platform::{logical_len, lstat, shallow_dir_size};
use crate::types::{base_name, is_hidden, EntryKind, TraversalPolicy};
use log::debug;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Compute the size in bytes of a file or directory.
///
/// Symlinks are never followed and always count as zero. A hidden path
/// counts as zero unless the policy includes hidden entries, even when it is
/// the path passed in. The name is taken as written, so `.` and `..` are
/// hidden too.
pub fn compute_size(path: &Path, policy: TraversalPolicy) -> Result<i64, SizeError> {
    let (kind, metadata) = lstat(path)?;

    if !policy.include_hidden && is_hidden(base_name(path)) {
        debug!("Skipped hidden path: {}", path.display());
        return Ok(0);
    }

    match kind {
        EntryKind::File => Ok(logical_len(&metadata)),
        EntryKind::Dir if policy.recursive => recursive_dir_size(path, policy),
        EntryKind::Dir => shallow_dir_size(path, policy),
        EntryKind::Symlink | EntryKind::Other => Ok(0),
    }
}

/// Walk the whole subtree below `root` and sum its regular files.
///
/// Hidden directories are pruned before they are entered. Only a failure to
/// open the root itself is an error; everything below it is best effort.
fn recursive_dir_size(root: &Path, policy: TraversalPolicy) -> Result<i64, SizeError> {
    let mut total_size = 0i64;

    let walker = WalkDir::new(root).min_depth(1).follow_links(false);

    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || policy.admits(e.file_name()))
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) if e.depth() == 0 => {
                return Err(SizeError::unreadable(root, io::Error::from(e)));
            }
            Err(e) => {
                debug!("Skipped (access error): {}", e);
                continue;
            }
        };

        if EntryKind::from_file_type(entry.file_type()) != EntryKind::File {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => total_size += logical_len(&metadata),
            Err(e) => debug!("Skipped {}: {}", entry.path().display(), e),
        }
    }

    Ok(total_size)
}
