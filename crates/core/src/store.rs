//! Single-note file operations addressed by root-relative note paths.
//!
//! The store owns mutation of the notes root. It never caches the hierarchy;
//! [`NoteStore::tree`] re-resolves it on every call.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::hierarchy::{HierarchyResolver, Resolution};
use crate::paths::{
    PathError, join_note_path, note_dir, note_file, parent_of, validate_name,
    validate_note_path,
};
use crate::render::NotePage;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found: {0}")]
    NotFound(String),

    #[error("a note with that name already exists: {0}")]
    AlreadyExists(String),

    #[error("parent note does not exist: {0}")]
    ParentNotFound(String),

    #[error(transparent)]
    Invalid(#[from] PathError),

    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn io_error(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.to_path_buf();
    move |source| StoreError::Io { action, path, source }
}

/// Initial content for a note created by name.
pub fn new_note_template(name: &str) -> String {
    format!("# {name}\n\nStart writing your note here...\n")
}

/// Markdown notes stored under a single root directory.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
    resolver: HierarchyResolver,
}

impl NoteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), resolver: HierarchyResolver::new() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Current note hierarchy, recomputed from disk.
    pub fn tree(&self) -> Resolution {
        self.resolver.resolve_root(&self.root)
    }

    pub fn exists(&self, path: &str) -> bool {
        validate_note_path(path).is_ok() && note_file(&self.root, path).is_file()
    }

    /// Create `<path>.md` with `content`. Missing parent folders are created.
    pub fn create(&self, path: &str, content: &str) -> Result<String, StoreError> {
        validate_note_path(path)?;
        let file = note_file(&self.root, path);
        if file.exists() {
            return Err(StoreError::AlreadyExists(path.to_string()));
        }

        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
        }

        let mut handle = match OpenOptions::new().write(true).create_new(true).open(&file) {
            Ok(handle) => handle,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists(path.to_string()));
            }
            Err(e) => return Err(io_error("create", &file)(e)),
        };
        handle.write_all(content.as_bytes()).map_err(io_error("write", &file))?;

        info!("Created note {}", path);
        Ok(path.to_string())
    }

    /// Create a note named `name`, optionally as a child of `parent`.
    ///
    /// The parent note must exist; its child folder is created on demand.
    pub fn create_note(&self, parent: Option<&str>, name: &str) -> Result<String, StoreError> {
        let name = name.trim();
        validate_name(name)?;

        if let Some(parent) = parent {
            validate_note_path(parent)?;
            if !note_file(&self.root, parent).is_file() {
                return Err(StoreError::ParentNotFound(parent.to_string()));
            }
            let folder = note_dir(&self.root, parent);
            fs::create_dir_all(&folder).map_err(io_error("create directory", &folder))?;
        }

        let path = join_note_path(parent, name);
        self.create(&path, &new_note_template(name))
    }

    pub fn read(&self, path: &str) -> Result<String, StoreError> {
        validate_note_path(path)?;
        let file = note_file(&self.root, path);
        match fs::read_to_string(&file) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(path.to_string()))
            }
            Err(e) => Err(io_error("read", &file)(e)),
        }
    }

    /// Read a note and render it for display.
    pub fn open(&self, path: &str) -> Result<NotePage, StoreError> {
        let content = self.read(path)?;
        Ok(NotePage::new(path, content))
    }

    /// Overwrite (or create) `<path>.md`.
    pub fn write(&self, path: &str, content: &str) -> Result<(), StoreError> {
        validate_note_path(path)?;
        let file = note_file(&self.root, path);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
        }
        fs::write(&file, content).map_err(io_error("write", &file))?;
        debug!("Saved note {}", path);
        Ok(())
    }

    /// Delete a note together with its child folder, if any.
    pub fn delete(&self, path: &str) -> Result<(), StoreError> {
        validate_note_path(path)?;
        let file = note_file(&self.root, path);
        if !file.is_file() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        fs::remove_file(&file).map_err(io_error("delete", &file))?;

        let folder = note_dir(&self.root, path);
        if folder.is_dir() {
            fs::remove_dir_all(&folder).map_err(io_error("delete", &folder))?;
        }

        info!("Deleted note {}", path);
        Ok(())
    }

    /// Rename a note in place, moving its child folder along with it.
    ///
    /// Returns the new note path, which keeps the old parent.
    pub fn rename(&self, old_path: &str, new_name: &str) -> Result<String, StoreError> {
        validate_note_path(old_path)?;
        validate_name(new_name)?;

        let old_file = note_file(&self.root, old_path);
        if !old_file.is_file() {
            return Err(StoreError::NotFound(old_path.to_string()));
        }

        let new_path = join_note_path(parent_of(old_path), new_name);
        let new_file = note_file(&self.root, &new_path);
        if new_file.exists() {
            return Err(StoreError::AlreadyExists(new_path));
        }

        let old_folder = note_dir(&self.root, old_path);
        let new_folder = note_dir(&self.root, &new_path);
        let move_folder = old_folder.is_dir();
        if move_folder && new_folder.exists() {
            return Err(StoreError::AlreadyExists(new_path));
        }

        fs::rename(&old_file, &new_file).map_err(io_error("rename", &old_file))?;
        if move_folder {
            fs::rename(&old_folder, &new_folder).map_err(io_error("rename", &old_folder))?;
        }

        info!("Renamed note {} -> {}", old_path, new_path);
        Ok(new_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_template() {
        assert_eq!(new_note_template("Ideas"), "# Ideas\n\nStart writing your note here...\n");
    }

    #[test]
    fn test_invalid_path_rejected_before_io() {
        let store = NoteStore::new("/nonexistent/root");
        assert!(matches!(store.read("../etc/passwd"), Err(StoreError::Invalid(_))));
        assert!(matches!(store.delete(""), Err(StoreError::Invalid(PathError::Empty))));
        assert!(matches!(
            store.rename("a", "b/c"),
            Err(StoreError::Invalid(PathError::NameWithSeparator(_)))
        ));
    }
}
