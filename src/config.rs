//! Run configuration: extension filter, JSON config file, resolved paths.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::error::{Error, Result};

/// Project-local config file consulted when no extensions are given on the
/// command line, relative to the root.
pub const CONFIG_RELATIVE_PATH: &str = ".vscode/treepress.json";

/// Project-local ignore file, relative to the root.
pub const IGNORE_FILE_NAME: &str = ".treepressignore";

/// Ordered set of extension glob tokens, each `*` or `*.<ext>`.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    tokens: Vec<String>,
    set: GlobSet,
    match_all: bool,
}

impl ExtensionFilter {
    /// The default filter: everything matches.
    pub fn match_all() -> Self {
        Self::from_extensions(["*"])
    }

    /// Build from bare extension strings; each becomes `*.<ext>` except a
    /// literal `*`, which passes through as the match-everything token.
    pub fn from_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = extensions
            .into_iter()
            .map(|e| {
                let e = e.as_ref().trim();
                if e == "*" {
                    e.to_string()
                } else {
                    format!("*.{e}")
                }
            })
            .collect();
        Self::from_tokens(tokens)
    }

    /// Parse a comma-separated extension list such as `cs,txt`.
    pub fn parse_csv(csv: &str) -> Self {
        Self::from_extensions(csv.split(','))
    }

    fn from_tokens(tokens: Vec<String>) -> Self {
        let match_all = tokens.iter().any(|t| t == "*");
        let mut builder = GlobSetBuilder::new();
        for token in &tokens {
            if let Ok(glob) = GlobBuilder::new(token).case_insensitive(true).build() {
                builder.add(glob);
            }
        }
        let set = builder.build().unwrap_or_else(|_| GlobSet::empty());
        Self {
            tokens,
            set,
            match_all,
        }
    }

    /// Match a bare file name (not a path) against the filter.
    pub fn matches(&self, file_name: &str) -> bool {
        self.match_all || self.set.is_match(file_name)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::match_all()
    }
}

/// Shape of `.vscode/treepress.json`. Both keys are required; unknown keys
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
}

/// Load and parse the JSON config file.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| Error::ConfigInvalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug)]
pub struct Config {
    /// Canonicalized scan root.
    pub root: PathBuf,
    /// Where the artifact is written.
    pub output_path: PathBuf,
    /// Artifact file name, excluded from its own input scan.
    pub output_name: String,
    pub filter: ExtensionFilter,
    /// Literal exclude names/paths from CLI and config file.
    pub excludes: Vec<String>,
    /// Ignore file to load patterns from, if any.
    pub ignore_file: Option<PathBuf>,
    /// Keep exclusion-matched files in the output with a placeholder body
    /// instead of dropping them.
    pub list_excluded: bool,
    pub quiet: bool,
    pub verbose: u8,
}

impl Config {
    /// Resolve parsed CLI arguments into a run configuration.
    ///
    /// The root must exist and be a directory. When no `--extensions` is
    /// given and `.vscode/treepress.json` exists under the root, extensions
    /// and excludes come from there; a malformed config file is fatal.
    pub fn resolve(args: &Args) -> Result<Self> {
        if !args.root.exists() {
            return Err(Error::RootNotFound {
                path: args.root.clone(),
            });
        }
        let root = args.root.canonicalize().map_err(|_| Error::RootNotFound {
            path: args.root.clone(),
        })?;
        if !root.is_dir() {
            return Err(Error::NotADirectory { path: root });
        }

        let mut excludes: Vec<String> = args.exclude.clone();
        let filter = match &args.extensions {
            Some(csv) => ExtensionFilter::parse_csv(csv),
            None => {
                let config_path = root.join(CONFIG_RELATIVE_PATH);
                if config_path.is_file() {
                    let file_config = load_config_file(&config_path)?;
                    excludes.extend(file_config.exclude);
                    ExtensionFilter::from_extensions(&file_config.extensions)
                } else {
                    ExtensionFilter::match_all()
                }
            }
        };

        let output_path = match &args.output {
            Some(path) => path.clone(),
            None => {
                let base = root
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "project".to_string());
                PathBuf::from(format!("{base}.md"))
            }
        };
        let output_name = output_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| output_path.to_string_lossy().to_string());

        let ignore_file = if args.no_ignore_file {
            None
        } else {
            Some(root.join(IGNORE_FILE_NAME))
        };

        Ok(Self {
            root,
            output_path,
            output_name,
            filter,
            excludes,
            ignore_file,
            list_excluded: args.list_excluded,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }
}
