// Rust guideline compliant 2026-02-06

//! Implementation of the `prehook run` command.

use crate::commands::Context;
use crate::output::OutputFormatter;
use anyhow::Result;
use prehook_core::Stage;
use prehook_runner::{all_files, staged_files, RunOptions, Runner};
use tracing::debug;

/// Which files a manual run checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileScope {
    /// Files staged for the next commit.
    Staged,
    /// Every tracked file.
    All,
    /// Files named on the command line.
    Given(Vec<String>),
}

/// Runs the hooks of `stage` by hand.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `hook_id` - Run only entries with this id
/// * `scope` - Files to check
/// * `stage` - Stage whose hooks run
/// * `formatter` - Output formatter for the report
///
/// # Returns
///
/// Whether every hook passed.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, the repository cannot
/// be read, or `hook_id` names no entry.
pub fn execute(
    ctx: &Context,
    hook_id: Option<String>,
    scope: FileScope,
    stage: Stage,
    formatter: &dyn OutputFormatter,
) -> Result<bool> {
    let root = ctx.require_repo()?;
    let manifest = ctx.manifest()?;
    let store = ctx.store()?;

    let files = match scope {
        FileScope::Staged => staged_files(root)?,
        FileScope::All => all_files(root)?,
        FileScope::Given(files) => files,
    };

    let mut options = RunOptions::for_stage(stage);
    options.hook_id = hook_id;
    options.fail_fast = ctx.config.fail_fast;
    options.fetch_missing = true;

    debug!(stage = %stage, files = files.len(), "Running hooks by hand");
    let report = Runner::new(root, &manifest, &store, options).run(files.as_slice())?;
    super::print_block(&formatter.format_report(&report));
    Ok(report.passed())
}
