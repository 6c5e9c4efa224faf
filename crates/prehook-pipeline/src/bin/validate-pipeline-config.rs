// Rust guideline compliant 2026-02-06

//! CLI entry point for the pipeline config validation hook.

use clap::Parser;
use prehook_pipeline::{check_files, default_files, DEFAULT_CONFIG_DIR};
use std::path::PathBuf;

/// Validate cookiecutter pipeline configuration files.
#[derive(Parser, Debug)]
#[command(name = "validate-pipeline-config", version)]
struct Args {
    /// Files to validate; defaults to every JSON file in --config-dir.
    files: Vec<PathBuf>,

    /// Directory searched when no files are given.
    #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let files = if args.files.is_empty() {
        default_files(&args.config_dir)?
    } else {
        args.files
    };

    let outcome = check_files(&files, &mut std::io::stdout().lock())?;
    std::process::exit(outcome.exit_code());
}
