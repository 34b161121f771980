//! Error types for size computation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while computing the size of a path.
///
/// Failures on individual entries below the root are never reported here;
/// those entries simply count as zero.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata lookup was refused.
    #[error("permission denied: {}", path.display())]
    AccessDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other metadata failure.
    #[error("failed to read metadata of {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The directory listing (or the root of a walk) could not be opened.
    #[error("failed to read directory {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SizeError {
    /// Classify a failed metadata lookup.
    pub fn metadata(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            _ => Self::Metadata { path, source },
        }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }
}

/// Error returned by [`crate::get_path_size`], naming the path that failed.
#[derive(Debug, Error)]
#[error("failed to get size for path {path:?}")]
pub struct PathSizeError {
    pub path: PathBuf,
    #[source]
    pub source: SizeError,
}
