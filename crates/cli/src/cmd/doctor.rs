use mdtree_core::config::{ConfigLoader, default_config_path};
use mdtree_core::hierarchy::HierarchyResolver;
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL mdt doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    logging::init(&rc);

    println!("OK   mdt doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("notes_root: {}", rc.notes_root.display());
    println!("attachments_dir: {}", rc.attachments_dir.display());

    if !rc.notes_root.exists() {
        println!("notes: 0 (notes_root does not exist yet)");
        return;
    }

    let resolution = HierarchyResolver::new().resolve_root(&rc.notes_root);
    println!("notes: {}", resolution.note_count());
    println!("unreadable folders: {}", resolution.failures.len());
}
