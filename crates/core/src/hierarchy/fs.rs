//! Filesystem primitives the resolver depends on.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// One entry of a directory listing.
///
/// `is_file` and `is_dir` describe the entry itself; a symlink is neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_file: bool,
    pub is_dir: bool,
}

impl DirEntryInfo {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_file: true, is_dir: false }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_file: false, is_dir: true }
    }
}

/// Read-only view of the storage the hierarchy is derived from.
pub trait NoteFs {
    fn exists(&self, path: &Path) -> bool;

    /// True if `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    /// Entries of `path` in the order the platform lists them.
    ///
    /// Names that are not valid UTF-8 are left out, since note paths are strings.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// [`NoteFs`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl NoteFs for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        // No sort_by: listing order is authoritative for sibling order.
        let mut entries = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1).follow_links(false) {
            let entry = entry.map_err(io::Error::from)?;
            let Some(name) = entry.file_name().to_str() else {
                warn!("Skipping entry with non UTF-8 name: {}", entry.path().display());
                continue;
            };
            let file_type = entry.file_type();
            entries.push(DirEntryInfo {
                name: name.to_string(),
                is_file: file_type.is_file(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        path.canonicalize()
    }
}
