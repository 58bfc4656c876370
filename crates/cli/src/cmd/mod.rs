pub mod attach;
pub mod delete;
pub mod doctor;
pub mod new;
pub mod output;
pub mod rename;
pub mod show;
pub mod tree;
pub mod write;

use std::path::Path;

use mdtree_core::config::{ConfigLoader, ResolvedConfig, default_config_path};
use mdtree_core::store::{NoteStore, StoreError};
use tracing::debug;

use crate::logging;

/// Load configuration and start logging, or exit with a message.
pub(crate) fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc);
            debug!("Profile '{}' with notes root {}", rc.active_profile, rc.notes_root.display());
            rc
        }
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

pub(crate) fn open_store(config: Option<&Path>, profile: Option<&str>) -> NoteStore {
    let rc = load_config(config, profile);
    NoteStore::new(rc.notes_root)
}

pub(crate) fn fail(e: &StoreError) -> ! {
    match e {
        StoreError::NotFound(path) => eprintln!("Error: Note not found: {}", path),
        StoreError::AlreadyExists(path) => {
            eprintln!("Error: A note with that name already exists: {}", path);
        }
        StoreError::ParentNotFound(path) => {
            eprintln!("Error: Parent note does not exist: {}", path);
        }
        _ => eprintln!("Error: {}", e),
    }
    std::process::exit(1);
}
