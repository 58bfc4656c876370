use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::WriteArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: WriteArgs) {
    let store = super::open_store(config, profile);

    let content = match &args.file {
        Some(file) => fs::read_to_string(file),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    let content = match content {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    };

    match store.write(&args.path, &content) {
        Ok(()) => println!("Saved: {}", args.path),
        Err(e) => super::fail(&e),
    }
}
