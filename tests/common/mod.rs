use std::fs;
use std::path::Path;
use tempfile::TempDir;

use treepress::config::{Config, ExtensionFilter};

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create files with a
/// one-line ASCII body.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "fixture\n").unwrap();
        }
    }
    tmp
}

/// Write a file with explicit contents under the fixture root.
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) {
    let full = root.join(relative);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full, contents).unwrap();
}

/// Default quiet run configuration over `root`, matching everything, with
/// the artifact written inside the root as `out.md`.
#[allow(dead_code)]
pub fn config_for(root: &Path) -> Config {
    let root = root.canonicalize().unwrap();
    Config {
        output_path: root.join("out.md"),
        output_name: "out.md".to_string(),
        root,
        filter: ExtensionFilter::match_all(),
        excludes: Vec::new(),
        ignore_file: None,
        list_excluded: false,
        quiet: true,
        verbose: 0,
    }
}

/// Relative paths of all selected files, in sequence order, honoring the
/// config's literal excludes.
#[allow(dead_code)]
pub fn selected_paths(config: &Config) -> Vec<String> {
    let mut exclusions = treepress::exclude::ExclusionSet::new();
    for name in &config.excludes {
        exclusions.add_literal(name);
    }
    let selector = treepress::select::Selector::new(config, &exclusions);
    selector
        .select()
        .files()
        .iter()
        .map(|f| f.relative.clone())
        .collect()
}
