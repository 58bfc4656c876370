use std::path::Path;

use crate::NewArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: NewArgs) {
    let store = super::open_store(config, profile);

    match store.create_note(args.parent.as_deref(), &args.name) {
        Ok(path) => println!("Created: {}", path),
        Err(e) => super::fail(&e),
    }
}
