use std::ffi::OsStr;
use std::fs::FileType;
use std::path::{is_separator, Path, MAIN_SEPARATOR};

/// Classification of a filesystem entry, taken without following links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Symlink,
    Dir,
    Other,
}

impl EntryKind {
    /// Classify a file type obtained from `symlink_metadata` or a
    /// non-following directory listing
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        }
    }
}

/// How a directory is traversed when computing its size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalPolicy {
    pub recursive: bool,
    pub include_hidden: bool,
}

impl TraversalPolicy {
    pub fn new(recursive: bool, include_hidden: bool) -> Self {
        Self {
            recursive,
            include_hidden,
        }
    }

    /// Whether an entry with this name takes part in the count
    pub fn admits(&self, name: &OsStr) -> bool {
        self.include_hidden || !is_hidden(name)
    }
}

/// Hidden entries are the ones whose name starts with a dot
pub fn is_hidden(name: impl AsRef<OsStr>) -> bool {
    name.as_ref().to_string_lossy().starts_with('.')
}

/// Last element of a path as written, so `.` and `x/..` keep their dot names
pub fn base_name(path: &Path) -> String {
    let text = path.as_os_str().to_string_lossy();
    let trimmed = text.trim_end_matches(is_separator);

    if trimmed.is_empty() {
        return if text.is_empty() {
            ".".to_string()
        } else {
            MAIN_SEPARATOR.to_string()
        };
    }

    match trimmed.rfind(is_separator) {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}
