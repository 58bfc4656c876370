//! Text and JSON rendering of the note tree.

use mdtree_core::hierarchy::{FailureKind, NoteNode, ResolveFailure};

/// Indented outline of `nodes`; orphan folders end with `/`.
pub fn format_tree(nodes: &[NoteNode]) -> String {
    let mut lines = Vec::new();
    push_lines(nodes, 0, &mut lines);
    lines.join("\n")
}

fn push_lines(nodes: &[NoteNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        let suffix = if node.is_orphan { "/" } else { "" };
        lines.push(format!("{}{}{}", "  ".repeat(depth), node.name, suffix));
        push_lines(&node.children, depth + 1, lines);
    }
}

pub fn print_tree(nodes: &[NoteNode], note_count: usize) {
    if nodes.is_empty() {
        println!("(no notes found)");
        return;
    }
    println!("{}", format_tree(nodes));
    println!();
    println!("-- {} notes --", note_count);
}

pub fn print_tree_json(nodes: &[NoteNode]) {
    println!("{}", serde_json::to_string_pretty(nodes).unwrap_or_default());
}

pub fn print_failures(failures: &[ResolveFailure]) {
    for failure in failures {
        let reason = match &failure.kind {
            FailureKind::Unreadable(msg) => msg.as_str(),
            FailureKind::SymlinkCycle => "directory already visited (symlink loop)",
        };
        eprintln!("warning: skipped {}: {}", failure.path.display(), reason);
    }
}
