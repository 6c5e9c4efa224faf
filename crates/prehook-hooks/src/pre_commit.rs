// Rust guideline compliant 2026-02-06

//! Pre-commit hook implementation.
//!
//! Runs the `pre-commit` stage against the files staged for the commit.

use crate::stage::run_stage;
use anyhow::Result;
use prehook_core::Stage;
use prehook_runner::{discover_root, staged_files, RunReport};
use std::path::Path;

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Path inside the Git repository
/// * `manifest` - Manifest overriding the configured one
///
/// # Returns
///
/// The run report. The caller exits with [`RunReport::exit_code`].
///
/// # Errors
///
/// Returns an error if:
/// - The repository or its index cannot be read
/// - The manifest is missing or invalid
pub fn pre_commit_hook(repo_path: &Path, manifest: Option<&Path>) -> Result<RunReport> {
    let root = discover_root(repo_path)?;
    let files = staged_files(&root)?;
    run_stage(&root, Stage::PreCommit, &files, manifest)
}
