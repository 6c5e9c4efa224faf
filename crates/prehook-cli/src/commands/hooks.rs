// Rust guideline compliant 2026-02-06

//! Hook command wrappers for invoking prehook Git hooks from the CLI.

use crate::commands::Context;
use crate::output::OutputFormatter;
use anyhow::Result;
use std::io::Read;

/// Runs the requested hook action.
///
/// A manifest given with `--config` replaces the configured one.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `action` - Hook action
/// * `formatter` - Output formatter for the report
///
/// # Returns
///
/// Whether every hook passed.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or the repository
/// cannot be read.
pub fn execute(
    ctx: &Context,
    action: HookAction,
    formatter: &dyn OutputFormatter,
) -> Result<bool> {
    let repo_path = ctx.require_repo()?;
    let manifest = ctx.manifest_override.as_deref();
    let report = match action {
        HookAction::PreCommit => prehook_hooks::pre_commit_hook(repo_path, manifest)?,
        HookAction::PrePush => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            prehook_hooks::pre_push_hook(repo_path, &input, manifest)?
        }
    };
    super::print_block(&formatter.format_report(&report));
    Ok(report.passed())
}

/// Supported hook actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum HookAction {
    /// Run the pre-commit hook
    PreCommit,
    /// Run the pre-push hook
    PrePush,
}
