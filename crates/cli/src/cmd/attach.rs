use std::fs;
use std::path::Path;

use mdtree_core::attachments::AttachmentStore;

use crate::AttachArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: AttachArgs) {
    let rc = super::load_config(config, profile);

    let bytes = match fs::read(&args.file) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };
    let original_name =
        args.file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

    let store = AttachmentStore::new(rc.attachments_dir);
    match store.save(&original_name, &bytes) {
        Ok(stored) => {
            println!("{}", stored.url_path);
            println!("![{}]({})", original_name, stored.url_path);
        }
        Err(e) => super::fail(&e),
    }
}
