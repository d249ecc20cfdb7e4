//! File selection: walks the root and applies every inclusion rule once,
//! producing the ordered file sequence that backs both the tree outline and
//! content emission.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::classify;
use crate::config::{Config, ExtensionFilter};
use crate::exclude::ExclusionSet;

/// Directories always skipped by exact segment name.
pub const RESERVED_DIRS: &[&str] = &[".git", ".vs"];

/// A file that survived selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// Absolute filesystem path.
    pub path: PathBuf,
    /// `/`-normalized path relative to the root.
    pub relative: String,
    /// Matched the exclusion set but kept for listing (placeholder body).
    pub excluded: bool,
}

/// The deduplicated, ordinally sorted result of one selection pass.
#[derive(Debug, Default)]
pub struct Selection {
    files: Vec<SelectedFile>,
}

impl Selection {
    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Membership by relative path.
    pub fn contains(&self, relative: &str) -> bool {
        self.files
            .binary_search_by(|f| f.relative.as_str().cmp(relative))
            .is_ok()
    }
}

/// Applies the inclusion rules. Built once per run from read-only
/// configuration; the tree renderer reuses its directory predicate so both
/// passes filter identically.
pub struct Selector<'a> {
    root: &'a Path,
    filter: &'a ExtensionFilter,
    exclusions: &'a ExclusionSet,
    output_name: &'a str,
    list_excluded: bool,
    quiet: bool,
}

impl<'a> Selector<'a> {
    pub fn new(config: &'a Config, exclusions: &'a ExclusionSet) -> Self {
        Self {
            root: &config.root,
            filter: &config.filter,
            exclusions,
            output_name: &config.output_name,
            list_excluded: config.list_excluded,
            quiet: config.quiet,
        }
    }

    /// Whether a directory is descended into. Reserved directories and
    /// directories matched by the exclusion set are pruned whole.
    pub fn is_dir_selected(&self, relative: &str, name: &str) -> bool {
        if RESERVED_DIRS.contains(&name) {
            return false;
        }
        !self.exclusions.is_excluded(relative, true)
    }

    /// Apply the file-level rules: the artifact's own name, the extension
    /// filter, the exclusion set, and the text classifier, in that order.
    /// Returns `None` when the file is dropped.
    fn classify_file(&self, path: &Path, relative: &str, name: &str) -> Option<SelectedFile> {
        if name.eq_ignore_ascii_case(self.output_name) {
            return None;
        }
        if !self.filter.matches(name) {
            return None;
        }
        if self.exclusions.is_excluded(relative, false) {
            if self.list_excluded {
                return Some(SelectedFile {
                    path: path.to_path_buf(),
                    relative: relative.to_string(),
                    excluded: true,
                });
            }
            return None;
        }
        if !classify::is_text(path) {
            return None;
        }
        Some(SelectedFile {
            path: path.to_path_buf(),
            relative: relative.to_string(),
            excluded: false,
        })
    }

    /// Enumerate everything under the root and build the ordered sequence.
    /// Unreadable subtrees are skipped with a console note; they never abort
    /// the run.
    pub fn select(&self) -> Selection {
        let mut files: Vec<SelectedFile> = Vec::new();

        let walker = WalkDir::new(self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                let relative = relative_path(self.root, entry.path());
                self.is_dir_selected(&relative, &name)
            });

        for entry in walker {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy().to_string();
                    let relative = relative_path(self.root, entry.path());
                    if let Some(file) = self.classify_file(entry.path(), &relative, &name) {
                        files.push(file);
                    }
                }
                Err(e) => {
                    if !self.quiet {
                        let path = e
                            .path()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| "<unknown>".to_string());
                        eprintln!("treepress: skipping {path}: {e}");
                    }
                }
            }
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        files.dedup_by(|a, b| a.relative == b.relative);
        Selection { files }
    }
}

/// Path relative to the root with separators normalized to `/`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_normalizes_separators() {
        let root = Path::new("/proj");
        assert_eq!(relative_path(root, Path::new("/proj/a/b.txt")), "a/b.txt");
    }

    #[test]
    fn relative_path_outside_root_is_left_alone() {
        let root = Path::new("/proj");
        assert_eq!(relative_path(root, Path::new("/other/x")), "/other/x");
    }
}
