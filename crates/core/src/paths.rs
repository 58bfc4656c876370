//! Root-relative note paths.
//!
//! A note path is `/`-separated, relative to the notes root, and carries no
//! extension: `projects/alpha` addresses `<root>/projects/alpha.md` and owns
//! the folder `<root>/projects/alpha/`.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

pub const MARKDOWN_EXT: &str = ".md";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("note path is empty")]
    Empty,

    #[error("note path must be relative: {0}")]
    Absolute(String),

    #[error("note path must not contain '.' or '..' segments: {0}")]
    Traversal(String),

    #[error("note path has an empty segment: {0}")]
    EmptySegment(String),

    #[error("invalid character {ch:?} in {value}")]
    InvalidChar { value: String, ch: char },

    #[error("name is required")]
    EmptyName,

    #[error("invalid name: cannot contain slashes: {0}")]
    NameWithSeparator(String),
}

/// Entries starting with a dot never take part in the hierarchy.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Base name of a markdown file name, `None` for anything else.
pub fn markdown_base_name(file_name: &str) -> Option<&str> {
    file_name.strip_suffix(MARKDOWN_EXT)
}

/// `full` relative to `root`, joined with `/` regardless of platform.
///
/// Falls back to the lossy full path when `full` is not under `root`.
pub fn relative_path(root: &Path, full: &Path) -> String {
    match full.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => full.to_string_lossy().into_owned(),
    }
}

/// Check a caller-supplied note path before it is mapped onto the filesystem.
pub fn validate_note_path(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if let Some(ch) = path.chars().find(|c| matches!(c, '\\' | '\0')) {
        return Err(PathError::InvalidChar { value: path.to_string(), ch });
    }
    if path.starts_with('/') || Path::new(path).has_root() {
        return Err(PathError::Absolute(path.to_string()));
    }
    for segment in path.split('/') {
        match segment {
            "" => return Err(PathError::EmptySegment(path.to_string())),
            "." | ".." => return Err(PathError::Traversal(path.to_string())),
            _ => {}
        }
    }
    // Catches prefixes such as `C:` on Windows.
    if Path::new(path).components().any(|c| !matches!(c, Component::Normal(_))) {
        return Err(PathError::Absolute(path.to_string()));
    }
    Ok(())
}

/// Check a single base name used for creating or renaming a note.
pub fn validate_name(name: &str) -> Result<(), PathError> {
    if name.trim().is_empty() {
        return Err(PathError::EmptyName);
    }
    if name.contains('/') || name.contains('\\') {
        return Err(PathError::NameWithSeparator(name.to_string()));
    }
    if name == "." || name == ".." {
        return Err(PathError::Traversal(name.to_string()));
    }
    if name.contains('\0') {
        return Err(PathError::InvalidChar { value: name.to_string(), ch: '\0' });
    }
    Ok(())
}

/// Markdown file backing the note at `path`.
pub fn note_file(root: &Path, path: &str) -> PathBuf {
    root.join(format!("{path}{MARKDOWN_EXT}"))
}

/// Child folder owned by the note at `path`.
pub fn note_dir(root: &Path, path: &str) -> PathBuf {
    root.join(path)
}

/// Parent note path, `None` for top-level notes.
pub fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once('/').map(|(parent, _)| parent)
}

/// Last segment of a note path.
pub fn base_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

pub fn join_note_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => format!("{parent}/{name}"),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a")]
    #[case("a/b/c")]
    #[case("my note")]
    #[case(".hidden/x")]
    fn test_valid_note_paths(#[case] path: &str) {
        assert_eq!(validate_note_path(path), Ok(()));
    }

    #[rstest]
    #[case("", PathError::Empty)]
    #[case("/etc/passwd", PathError::Absolute("/etc/passwd".into()))]
    #[case("../up", PathError::Traversal("../up".into()))]
    #[case("a/./b", PathError::Traversal("a/./b".into()))]
    #[case("a//b", PathError::EmptySegment("a//b".into()))]
    #[case("a/", PathError::EmptySegment("a/".into()))]
    #[case("a\\b", PathError::InvalidChar { value: "a\\b".into(), ch: '\\' })]
    fn test_invalid_note_paths(#[case] path: &str, #[case] expected: PathError) {
        assert_eq!(validate_note_path(path), Err(expected));
    }

    #[rstest]
    #[case("   ", PathError::EmptyName)]
    #[case("a/b", PathError::NameWithSeparator("a/b".into()))]
    #[case("a\\b", PathError::NameWithSeparator("a\\b".into()))]
    #[case("..", PathError::Traversal("..".into()))]
    fn test_invalid_names(#[case] name: &str, #[case] expected: PathError) {
        assert_eq!(validate_name(name), Err(expected));
    }

    #[test]
    fn test_markdown_base_name_strips_trailing_extension_only() {
        assert_eq!(markdown_base_name("a.md"), Some("a"));
        assert_eq!(markdown_base_name("a.md.md"), Some("a.md"));
        assert_eq!(markdown_base_name("a.MD"), None);
        assert_eq!(markdown_base_name("a.txt"), None);
    }

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let root = Path::new("/notes");
        assert_eq!(relative_path(root, &root.join("a").join("b").join("c.md")), "a/b/c.md");
        assert_eq!(relative_path(root, Path::new("/elsewhere/x")), "/elsewhere/x");
    }

    #[test]
    fn test_parent_and_join() {
        assert_eq!(parent_of("a/b/c"), Some("a/b"));
        assert_eq!(parent_of("a"), None);
        assert_eq!(base_name("a/b/c"), "c");
        assert_eq!(base_name("a"), "a");
        assert_eq!(join_note_path(Some("a/b"), "c"), "a/b/c");
        assert_eq!(join_note_path(None, "c"), "c");
        assert_eq!(note_file(Path::new("/n"), "a/b"), PathBuf::from("/n/a/b.md"));
        assert_eq!(note_dir(Path::new("/n"), "a/b"), PathBuf::from("/n/a/b"));
    }
}
