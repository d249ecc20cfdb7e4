#![forbid(unsafe_code)]
//! treepress — renders a directory tree and the contents of its text files
//! into a single document: a project outline followed by each file under a
//! heading.

pub mod assemble;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod exclude;
pub mod pattern;
pub mod select;
pub mod tree;

use std::path::PathBuf;

use assemble::FileBody;
use config::Config;
use exclude::ExclusionSet;
use select::Selector;

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub files: usize,
    pub bytes: u64,
}

/// Execute one full run: build the exclusion set, select files, render the
/// tree, read contents, and write the artifact.
pub fn run(config: &Config) -> error::Result<RunSummary> {
    let mut exclusions = ExclusionSet::new();
    for name in &config.excludes {
        exclusions.add_literal(name);
    }
    if let Some(ignore_file) = &config.ignore_file {
        for pattern in pattern::load_ignore_file(ignore_file) {
            exclusions.add_pattern(pattern);
        }
    }

    let selector = Selector::new(config, &exclusions);
    let selection = selector.select();
    if config.verbose > 0 {
        eprintln!("treepress: {} file(s) selected", selection.len());
    }

    let tree_text = tree::render_tree(&config.root, &selector, &selection);
    let entries = assemble::collect_entries(&selection);

    if !config.quiet {
        for entry in &entries {
            match &entry.body {
                FileBody::Text(content) => {
                    if !content.is_empty() {
                        println!(
                            "Added: {} ({})",
                            entry.relative,
                            assemble::human_size(content.len() as u64)
                        );
                    }
                }
                FileBody::ReadError(message) => {
                    eprintln!("treepress: {}: {message}", entry.relative);
                }
                FileBody::Excluded => {
                    println!("Listed (excluded): {}", entry.relative);
                }
            }
        }
    }

    let document = assemble::render_document(&tree_text, &entries);
    assemble::write_document(&config.output_path, &document)?;

    Ok(RunSummary {
        output_path: config.output_path.clone(),
        files: selection.len(),
        bytes: document.len() as u64,
    })
}
