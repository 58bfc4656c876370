use std::path::Path;

use crate::ShowArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ShowArgs) {
    let store = super::open_store(config, profile);

    let page = match store.open(&args.path) {
        Ok(page) => page,
        Err(e) => super::fail(&e),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page).unwrap_or_default());
    } else if args.html {
        print!("{}", page.html);
    } else {
        print!("{}", page.content);
    }
}
