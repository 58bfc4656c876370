//! Markdown rendering for note display.

use std::sync::LazyLock;

use comrak::{Options, markdown_to_html};
use regex::Regex;
use serde::Serialize;

use crate::paths::base_name;

static TITLE_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("valid regex"));

/// Render markdown to HTML. Raw HTML in the input is not passed through.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    markdown_to_html(markdown, &options)
}

/// First `# Heading` line in the document, or `fallback`.
pub fn extract_title(content: &str, fallback: &str) -> String {
    TITLE_HEADING_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// A note ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePage {
    pub path: String,
    pub title: String,
    pub content: String,
    pub html: String,
}

impl NotePage {
    pub fn new(path: &str, content: String) -> Self {
        let title = extract_title(&content, base_name(path));
        let html = to_html(&content);
        Self { path: path.to_string(), title, content, html }
    }
}
