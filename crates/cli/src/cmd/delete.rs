use std::path::Path;

use dialoguer::Confirm;

use crate::DeleteArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: DeleteArgs) {
    let store = super::open_store(config, profile);

    if !store.exists(&args.path) {
        eprintln!("Error: Note not found: {}", args.path);
        std::process::exit(1);
    }

    if !args.yes && !confirm_delete(&args.path) {
        println!("Cancelled.");
        return;
    }

    match store.delete(&args.path) {
        Ok(()) => println!("Deleted: {}", args.path),
        Err(e) => super::fail(&e),
    }
}

fn confirm_delete(path: &str) -> bool {
    Confirm::new()
        .with_prompt(format!("Delete '{path}' and all of its child notes?"))
        .default(false)
        .interact()
        .unwrap_or(false)
}
