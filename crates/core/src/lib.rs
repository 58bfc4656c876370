#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Filesystem-backed hierarchical note store.
//!
//! Notes are markdown files; a note `foo.md` may own a sibling folder `foo/`
//! holding its child notes. [`hierarchy`] reconstructs the logical tree from
//! that convention, [`store`] performs single-note mutations addressed by the
//! root-relative paths the tree hands out.

pub mod attachments;
pub mod config;
pub mod hierarchy;
pub mod paths;
pub mod render;
pub mod store;

pub use hierarchy::{HierarchyResolver, NoteNode, Resolution};
pub use store::{NoteStore, StoreError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
