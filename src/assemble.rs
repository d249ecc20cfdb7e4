//! Document assembly: the tree outline plus one section per selected file.

use std::path::Path;

use crate::error::{Error, Result};
use crate::select::Selection;

/// Placeholder body for files listed but excluded from content emission.
pub const EXCLUDED_PLACEHOLDER: &str = "[contents excluded]";

/// What ended up standing in for a file's content.
#[derive(Debug, Clone, PartialEq)]
pub enum FileBody {
    /// Full decoded text.
    Text(String),
    /// The file could not be read; the message replaces the content.
    ReadError(String),
    /// Matched the exclusion set under `--list-excluded`.
    Excluded,
}

/// One (relative-path, content-or-placeholder) pair handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEntry {
    pub relative: String,
    pub body: FileBody,
}

/// Read every selected file, in sequence order. Read failures are contained
/// to their entry.
pub fn collect_entries(selection: &Selection) -> Vec<DocumentEntry> {
    selection
        .files()
        .iter()
        .map(|file| {
            let body = if file.excluded {
                FileBody::Excluded
            } else {
                match std::fs::read_to_string(&file.path) {
                    Ok(content) => FileBody::Text(content),
                    Err(e) => FileBody::ReadError(format!("Error reading file: {e}")),
                }
            };
            DocumentEntry {
                relative: file.relative.clone(),
                body,
            }
        })
        .collect()
}

/// Render the final document: a project-tree section, then each file's
/// contents under its relative path as a heading. Files that read as empty
/// appear in the tree but get no content section.
pub fn render_document(tree_text: &str, entries: &[DocumentEntry]) -> String {
    let mut out = String::new();
    out.push_str("# Project Tree\n\n");
    out.push_str("```\n");
    out.push_str(tree_text);
    if !tree_text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");

    for entry in entries {
        match &entry.body {
            FileBody::Text(content) => {
                if content.is_empty() {
                    continue;
                }
                out.push_str("\n---\n\n");
                out.push_str(&format!("## {}\n\n", entry.relative));
                out.push_str("```\n");
                out.push_str(content);
                if !content.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
            }
            FileBody::ReadError(message) => {
                out.push_str("\n---\n\n");
                out.push_str(&format!("## {}\n\n", entry.relative));
                out.push_str(&format!("{message}\n"));
            }
            FileBody::Excluded => {
                out.push_str("\n---\n\n");
                out.push_str(&format!("## {}\n\n", entry.relative));
                out.push_str(&format!("{EXCLUDED_PLACEHOLDER}\n"));
            }
        }
    }
    out
}

/// Write the artifact.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| Error::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}

/// Human-readable size, two decimals at most.
pub fn human_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut len = bytes as f64;
    let mut order = 0;
    while len >= 1024.0 && order < UNITS.len() - 1 {
        order += 1;
        len /= 1024.0;
    }
    let formatted = format!("{len:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[order])
}
