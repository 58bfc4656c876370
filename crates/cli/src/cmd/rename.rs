//! Rename command implementation.

use std::path::Path;

use crate::RenameArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: RenameArgs) {
    let store = super::open_store(config, profile);

    match store.rename(&args.path, &args.new_name) {
        Ok(new_path) => println!("Renamed: {} -> {}", args.path, new_path),
        Err(e) => super::fail(&e),
    }
}
