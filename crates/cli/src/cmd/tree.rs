use std::path::Path;

use super::output::{print_failures, print_tree, print_tree_json};
use crate::TreeArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: TreeArgs) {
    let store = super::open_store(config, profile);
    let resolution = store.tree();

    if args.json {
        print_tree_json(&resolution.nodes);
    } else {
        print_tree(&resolution.nodes, resolution.note_count());
    }

    print_failures(&resolution.failures);
    if args.strict && resolution.is_partial() {
        eprintln!(
            "Error: note tree is incomplete ({} folders skipped)",
            resolution.failures.len()
        );
        std::process::exit(1);
    }
}
