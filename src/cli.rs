use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treepress",
    version,
    about = "Render a project tree and its text files into a single document"
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Comma-separated extension list, e.g. "cs,txt" ("*" for everything)
    #[arg(short = 'e', long = "extensions")]
    pub extensions: Option<String>,

    /// File or directory names to exclude (repeatable)
    #[arg(short = 'x', long = "exclude", action = clap::ArgAction::Append)]
    pub exclude: Vec<String>,

    /// List excluded files in the output with a placeholder body
    #[arg(long = "list-excluded")]
    pub list_excluded: bool,

    /// Do not read the project's .treepressignore file
    #[arg(long = "no-ignore-file")]
    pub no_ignore_file: bool,

    /// Output file path (default: <root name>.md in the current directory)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Increase diagnostic output (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress console reporting
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}
