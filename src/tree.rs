//! Deterministic recursive tree outline of the selected files.

use std::fs;
use std::path::Path;

use crate::select::{relative_path, Selection, Selector};

/// Branch glyph used on every line; there is no special last-child form.
const BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
/// Continuation marker prepended once per nesting level below the root.
const CONTINUATION: &str = "\u{2502}   "; // │

/// Render the project outline.
///
/// The root's own name is the first line. Within each directory, included
/// files come first, then subdirectories (suffixed `/`), each group sorted by
/// name ascending, case-insensitively, recursing depth-first. Directories
/// are listed even when nothing under them survived filtering; the file
/// lines are exactly the selection's files, so the tree and the emitted
/// contents always describe the same set.
pub fn render_tree(root: &Path, selector: &Selector<'_>, selection: &Selection) -> String {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root.to_string_lossy().to_string());

    let mut out = String::new();
    out.push_str(&root_name);
    out.push('\n');
    render_dir(root, root, selector, selection, 1, &mut out);
    out
}

fn render_dir(
    root: &Path,
    dir: &Path,
    selector: &Selector<'_>,
    selection: &Selection,
    depth: usize,
    out: &mut String,
) {
    // An unlistable directory only loses its own subtree.
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut files: Vec<String> = Vec::new();
    let mut dirs: Vec<String> = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        match entry.file_type() {
            Ok(t) if t.is_dir() => dirs.push(name),
            Ok(t) if t.is_file() => files.push(name),
            _ => {}
        }
    }
    sort_names(&mut files);
    sort_names(&mut dirs);

    for name in &files {
        let relative = relative_path(root, &dir.join(name));
        if selection.contains(&relative) {
            push_line(out, depth, name, false);
        }
    }
    for name in &dirs {
        let path = dir.join(name);
        let relative = relative_path(root, &path);
        if selector.is_dir_selected(&relative, name) {
            push_line(out, depth, name, true);
            render_dir(root, &path, selector, selection, depth + 1, out);
        }
    }
}

/// Case-insensitive ascending, with the original spelling as tiebreaker so
/// the order is total.
fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}

fn push_line(out: &mut String, depth: usize, name: &str, is_dir: bool) {
    for _ in 1..depth {
        out.push_str(CONTINUATION);
    }
    out.push_str(BRANCH);
    out.push_str(name);
    if is_dir {
        out.push('/');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_sort_case_insensitively() {
        let mut names = vec![
            "Banana.txt".to_string(),
            "apple.txt".to_string(),
            "Cherry.txt".to_string(),
        ];
        sort_names(&mut names);
        assert_eq!(names, ["apple.txt", "Banana.txt", "Cherry.txt"]);
    }

    #[test]
    fn equal_folded_names_keep_a_total_order() {
        let mut names = vec!["README".to_string(), "readme".to_string()];
        sort_names(&mut names);
        assert_eq!(names, ["README", "readme"]);
    }

    #[test]
    fn line_prefix_grows_with_depth() {
        let mut out = String::new();
        push_line(&mut out, 1, "a.txt", false);
        push_line(&mut out, 2, "sub", true);
        assert_eq!(out, "\u{251c}\u{2500}\u{2500} a.txt\n\u{2502}   \u{251c}\u{2500}\u{2500} sub/\n");
    }
}
