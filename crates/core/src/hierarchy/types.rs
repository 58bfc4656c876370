//! Data structures produced by the hierarchy resolver.

use std::path::PathBuf;

use serde::Serialize;

/// A note or orphan folder in the reconstructed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteNode {
    /// File name without `.md`, or the folder name for an orphan.
    pub name: String,
    /// Root-relative address, `/`-separated, without extension.
    pub path: String,
    /// True iff a child folder exists for this node.
    pub has_children: bool,
    /// Child nodes, empty unless `has_children`.
    pub children: Vec<NoteNode>,
    /// Folder with descendant notes but no note of its own.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_orphan: bool,
}

impl NoteNode {
    pub fn note(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Option<Vec<NoteNode>>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            has_children: children.is_some(),
            children: children.unwrap_or_default(),
            is_orphan: false,
        }
    }

    pub fn orphan(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<NoteNode>,
    ) -> Self {
        Self { name: name.into(), path: path.into(), has_children: true, children, is_orphan: true }
    }

    /// Number of real notes in this subtree, orphan folders excluded.
    pub fn note_count(&self) -> usize {
        let own = usize::from(!self.is_orphan);
        own + self.children.iter().map(NoteNode::note_count).sum::<usize>()
    }
}

/// Why a subtree contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// Listing or canonicalising the directory failed.
    Unreadable(String),
    /// The directory was already entered during this resolution.
    SymlinkCycle,
}

/// A subtree that was skipped during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
}

/// Outcome of a resolution: the tree plus any subtrees that were skipped.
///
/// An absent root is not a failure; `nodes` is simply empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub nodes: Vec<NoteNode>,
    pub failures: Vec<ResolveFailure>,
}

impl Resolution {
    /// True when at least one subtree was dropped because of a failure.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn note_count(&self) -> usize {
        self.nodes.iter().map(NoteNode::note_count).sum()
    }
}
