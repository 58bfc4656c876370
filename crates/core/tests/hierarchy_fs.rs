use mdtree_core::hierarchy::{FailureKind, HierarchyResolver, NoteNode};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "# note\n").unwrap();
}

/// Directory listing order is platform-defined; sort for stable comparisons.
fn sorted(mut nodes: Vec<NoteNode>) -> Vec<NoteNode> {
    nodes.sort_by(|a, b| a.name.cmp(&b.name));
    for node in &mut nodes {
        node.children = sorted(std::mem::take(&mut node.children));
    }
    nodes
}

fn leaf(name: &str, path: &str) -> NoteNode {
    NoteNode::note(name, path, None)
}

#[test]
fn resolves_mixed_vault() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(root, "x.md");
    write(root, "a.md");
    write(root, "a/b.md");
    write(root, "a/b/c.md");
    write(root, "orphan/z.md");
    write(root, "readme.txt");
    write(root, ".attachments/image-1.md");
    fs::create_dir_all(root.join("emptyOrphan")).unwrap();
    fs::create_dir_all(root.join("onlyjunk")).unwrap();
    write(root, "onlyjunk/data.json");

    let result = HierarchyResolver::new().resolve_root(root);
    assert!(!result.is_partial());

    let expected = vec![
        NoteNode::note(
            "a",
            "a",
            Some(vec![NoteNode::note("b", "a/b", Some(vec![leaf("c", "a/b/c")]))]),
        ),
        NoteNode::orphan("orphan", "orphan", vec![leaf("z", "orphan/z")]),
        leaf("x", "x"),
    ];
    assert_eq!(sorted(result.nodes), expected);
}

#[test]
fn missing_root_is_empty() {
    let tmp = TempDir::new().unwrap();
    let result = HierarchyResolver::new().resolve_root(&tmp.path().join("not-created-yet"));

    assert!(result.nodes.is_empty());
    assert!(!result.is_partial());
}

#[test]
fn root_that_is_a_file_is_partial() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "file.md");

    let result = HierarchyResolver::new().resolve_root(&tmp.path().join("file.md"));
    assert!(result.nodes.is_empty());
    assert!(result.is_partial());
}

#[test]
fn repeated_resolution_is_identical() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.md");
    write(tmp.path(), "a/b.md");
    write(tmp.path(), "o/p.md");

    let resolver = HierarchyResolver::new();
    assert_eq!(resolver.resolve_root(tmp.path()), resolver.resolve_root(tmp.path()));
}

#[test]
fn json_output_matches_wire_shape() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "o/p.md");

    let result = HierarchyResolver::new().resolve_root(tmp.path());
    let json = serde_json::to_value(&result.nodes).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "name": "o",
            "path": "o",
            "hasChildren": true,
            "isOrphan": true,
            "children": [{"name": "p", "path": "o/p", "hasChildren": false, "children": []}]
        }])
    );
}

#[cfg(unix)]
#[test]
fn symlink_loop_terminates() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "loop.md");
    write(root, "real.md");
    fs::create_dir(root.join("real")).unwrap();
    // real/loop.md owns real/loop -> root
    write(root, "real/loop.md");
    std::os::unix::fs::symlink(root, root.join("real").join("loop")).unwrap();

    let result = HierarchyResolver::new().resolve_root(root);

    let real = result.nodes.iter().find(|n| n.name == "real").unwrap();
    let inner = real.children.iter().find(|n| n.name == "loop").unwrap();
    assert!(inner.has_children);
    assert!(inner.children.is_empty());
    assert!(result.failures.iter().any(|f| f.kind == FailureKind::SymlinkCycle));
}

#[cfg(unix)]
#[test]
fn shared_symlink_target_lists_children_twice() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "real.md");
    write(root, "real/n.md");
    write(root, "alias.md");
    std::os::unix::fs::symlink(root.join("real"), root.join("alias")).unwrap();

    let result = HierarchyResolver::new().resolve_root(root);

    assert!(!result.is_partial());
    assert_eq!(
        sorted(result.nodes),
        vec![
            NoteNode::note("alias", "alias", Some(vec![leaf("n", "alias/n")])),
            NoteNode::note("real", "real", Some(vec![leaf("n", "real/n")])),
        ]
    );
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_entries_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "ok.md");
    fs::write(root.join(OsStr::from_bytes(b"bad\xff.md")), "# bad").unwrap();
    let bad_dir = root.join(OsStr::from_bytes(b"dir\xfe"));
    fs::create_dir(&bad_dir).unwrap();
    fs::write(bad_dir.join("x.md"), "# x").unwrap();

    let result = HierarchyResolver::new().resolve_root(root);

    assert_eq!(result.nodes, vec![leaf("ok", "ok")]);
    assert!(!result.is_partial());
}

#[cfg(unix)]
#[test]
fn permission_denied_subtree_is_contained() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "ok.md");
    write(root, "locked.md");
    write(root, "locked/inner.md");

    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    let readable = fs::read_dir(&locked).is_ok();

    let result = HierarchyResolver::new().resolve_root(root);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    // Running as root ignores permission bits.
    if readable {
        return;
    }

    let sorted = sorted(result.nodes.clone());
    assert_eq!(sorted.len(), 2);
    assert_eq!(sorted[0], NoteNode::note("locked", "locked", Some(Vec::new())));
    assert!(result.is_partial());
}
