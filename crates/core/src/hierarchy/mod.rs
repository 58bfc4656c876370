//! Note hierarchy reconstruction.
//!
//! The tree is derived state: every call walks the notes root from scratch and
//! pairs `name.md` files with their `name/` folders. Nothing is cached.

pub mod fs;
pub mod resolver;
pub mod types;

pub use fs::{DirEntryInfo, NoteFs, StdFs};
pub use resolver::HierarchyResolver;
pub use types::{FailureKind, NoteNode, Resolution, ResolveFailure};
