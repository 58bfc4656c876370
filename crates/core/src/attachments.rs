//! Flat store for binary attachments such as pasted images.
//!
//! Attachments live outside the note hierarchy; by default the directory is
//! `<notes_root>/.attachments`, which the resolver skips as hidden.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::store::StoreError;

pub const ATTACHMENTS_DIR_NAME: &str = ".attachments";
const DEFAULT_EXTENSION: &str = ".png";

/// Result of saving an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredAttachment {
    pub filename: String,
    /// Address notes use to embed the attachment.
    pub url_path: String,
}

#[derive(Debug, Clone)]
pub struct AttachmentStore {
    dir: PathBuf,
}

impl AttachmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Attachment store in the default location under `notes_root`.
    pub fn for_notes_root(notes_root: &Path) -> Self {
        Self::new(notes_root.join(ATTACHMENTS_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `bytes` under a freshly generated unique name.
    pub fn save(
        &self,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredAttachment, StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            action: "create directory",
            path: self.dir.clone(),
            source,
        })?;

        let filename = generate_filename(original_name);
        let path = self.dir.join(&filename);
        fs::write(&path, bytes).map_err(|source| StoreError::Io {
            action: "write",
            path: path.clone(),
            source,
        })?;

        info!("Stored attachment {} ({} bytes)", filename, bytes.len());
        Ok(StoredAttachment {
            url_path: format!("/{ATTACHMENTS_DIR_NAME}/{filename}"),
            filename,
        })
    }

    /// Read an attachment and its content type.
    pub fn load(&self, filename: &str) -> Result<(Vec<u8>, &'static str), StoreError> {
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || filename == "."
            || filename == ".."
        {
            return Err(StoreError::NotFound(filename.to_string()));
        }

        let path = self.dir.join(filename);
        match fs::read(&path) {
            Ok(bytes) => Ok((bytes, content_type_for(filename))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(filename.to_string()))
            }
            Err(source) => Err(StoreError::Io { action: "read", path, source }),
        }
    }
}

/// `image-<uuid><ext>`, keeping the original extension when there is one.
pub fn generate_filename(original_name: &str) -> String {
    let ext = Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map_or_else(|| DEFAULT_EXTENSION.to_string(), |e| format!(".{e}"));
    format!("image-{}{}", Uuid::new_v4(), ext)
}

pub fn content_type_for(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
