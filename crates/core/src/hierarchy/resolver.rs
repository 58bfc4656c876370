//! Rebuilds the note tree from the `name.md` + `name/` convention.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::fs::{NoteFs, StdFs};
use super::types::{FailureKind, NoteNode, Resolution, ResolveFailure};
use crate::paths::{is_hidden, markdown_base_name, relative_path};

/// Walks a notes root and produces the ordered note hierarchy.
///
/// Stateless between calls: each [`resolve`](Self::resolve) re-reads the
/// directory tree and never touches the filesystem beyond metadata reads.
#[derive(Debug, Default, Clone)]
pub struct HierarchyResolver<F: NoteFs = StdFs> {
    fs: F,
}

impl HierarchyResolver<StdFs> {
    pub fn new() -> Self {
        Self { fs: StdFs }
    }
}

impl<F: NoteFs> HierarchyResolver<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Resolve the whole tree below `root`.
    pub fn resolve_root(&self, root: &Path) -> Resolution {
        self.resolve(root, root)
    }

    /// Resolve `directory`, computing every node path relative to `root`.
    ///
    /// Never fails. A missing directory yields an empty tree; unreadable
    /// subtrees and symlink cycles are logged, contribute nothing, and are
    /// reported in [`Resolution::failures`].
    pub fn resolve(&self, directory: &Path, root: &Path) -> Resolution {
        let mut walk =
            Walk { fs: &self.fs, root, ancestors: HashSet::new(), failures: Vec::new() };
        let nodes = walk.read_directory(directory);
        Resolution { nodes, failures: walk.failures }
    }
}

/// State of one top-level resolution.
struct Walk<'a, F> {
    fs: &'a F,
    root: &'a Path,
    /// Canonical directories on the path from the root to the current one.
    /// Re-entering one of them means a symlink loop.
    ancestors: HashSet<PathBuf>,
    failures: Vec<ResolveFailure>,
}

impl<F: NoteFs> Walk<'_, F> {
    fn read_directory(&mut self, dir: &Path) -> Vec<NoteNode> {
        if !self.fs.exists(dir) {
            debug!("Notes directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !self.fs.is_dir(dir) {
            self.fail(dir, FailureKind::Unreadable("not a directory".to_string()));
            return Vec::new();
        }

        let canonical = match self.fs.canonicalize(dir) {
            Ok(canonical) => canonical,
            Err(e) => {
                self.fail(dir, FailureKind::Unreadable(e.to_string()));
                return Vec::new();
            }
        };
        if !self.ancestors.insert(canonical.clone()) {
            self.fail(dir, FailureKind::SymlinkCycle);
            return Vec::new();
        }

        let nodes = self.read_entries(dir);
        self.ancestors.remove(&canonical);
        nodes
    }

    fn read_entries(&mut self, dir: &Path) -> Vec<NoteNode> {
        let entries = match self.fs.list_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                self.fail(dir, FailureKind::Unreadable(e.to_string()));
                return Vec::new();
            }
        };

        // Pass 1: note files that own a sibling folder. Must complete before
        // any folder is classified as an orphan.
        let owned: HashSet<&str> = entries
            .iter()
            .filter(|entry| entry.is_file)
            .filter_map(|entry| markdown_base_name(&entry.name))
            .filter(|base| self.fs.is_dir(&dir.join(base)))
            .collect();

        // Pass 2: build nodes in listing order.
        let mut nodes = Vec::new();
        for entry in &entries {
            if is_hidden(&entry.name) {
                continue;
            }

            let full = dir.join(&entry.name);

            if entry.is_file {
                let Some(base) = markdown_base_name(&entry.name) else {
                    continue;
                };
                let children = if owned.contains(base) {
                    Some(self.read_directory(&dir.join(base)))
                } else {
                    None
                };
                let path = relative_path(self.root, &full);
                let path = markdown_base_name(&path).unwrap_or(path.as_str()).to_string();
                nodes.push(NoteNode::note(base, path, children));
            } else if entry.is_dir && !owned.contains(entry.name.as_str()) {
                let children = self.read_directory(&full);
                if children.is_empty() {
                    debug!("Pruning empty orphan folder: {}", full.display());
                    continue;
                }
                debug!("Orphan folder without note: {}", full.display());
                nodes.push(NoteNode::orphan(
                    entry.name.clone(),
                    relative_path(self.root, &full),
                    children,
                ));
            }
        }

        nodes
    }

    fn fail(&mut self, dir: &Path, kind: FailureKind) {
        match &kind {
            FailureKind::Unreadable(reason) => {
                warn!("Error reading notes directory {}: {}", dir.display(), reason);
            }
            FailureKind::SymlinkCycle => {
                warn!("Skipping symlink loop back into {}", dir.display());
            }
        }
        self.failures.push(ResolveFailure { path: dir.to_path_buf(), kind });
    }
}
