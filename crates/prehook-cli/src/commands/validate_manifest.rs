// Rust guideline compliant 2026-02-06

//! Implementation of the `prehook validate-manifest` command.

use crate::commands::Context;
use crate::output::OutputFormatter;
use anyhow::{Context as _, Result};
use prehook_core::load_manifest;
use std::path::Path;

/// Parses and validates a manifest without running anything.
///
/// Unrecognized top-level keys are logged as warnings, not rejected.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `path` - Manifest to check; the configured manifest when `None`
/// * `formatter` - Output formatter for the summary
///
/// # Errors
///
/// Returns an error naming the file if it cannot be read or is invalid.
pub fn execute(ctx: &Context, path: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let path = path.unwrap_or(&ctx.manifest_path);
    let manifest =
        load_manifest(path).with_context(|| format!("Invalid manifest {}", path.display()))?;

    super::print_block(&formatter.format_manifest(path, &manifest));
    Ok(())
}
