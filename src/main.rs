#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use treepress::assemble;
use treepress::cli::Args;
use treepress::config::Config;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("treepress: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    let config = Config::resolve(&args)?;

    if !config.quiet {
        println!("Extensions: {}", config.filter.tokens().join(", "));
        println!("Excluded: {}", config.excludes.join(", "));
    }

    let summary = treepress::run(&config)?;

    if !config.quiet {
        println!(
            "Document '{}' created successfully! Size: {}",
            summary.output_path.display(),
            assemble::human_size(summary.bytes)
        );
    }
    Ok(())
}
