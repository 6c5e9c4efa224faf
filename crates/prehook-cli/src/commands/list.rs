// Rust guideline compliant 2026-02-06

//! Implementation of the `prehook list` command.

use crate::commands::Context;
use crate::output::{HookRow, OutputFormatter};
use anyhow::Result;
use prehook_core::Manifest;
use prehook_runner::{resolve_all, Resolution};

/// Lists the hooks the manifest declares.
///
/// Providers are not fetched; hooks of providers missing from the store are
/// listed as unavailable.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or the provider store
/// cannot be read.
pub fn execute(ctx: &Context, formatter: &dyn OutputFormatter) -> Result<()> {
    let manifest = ctx.manifest()?;
    let store = ctx.store()?;
    let resolutions = resolve_all(&manifest, &store, false)?;
    let rows = hook_rows(&manifest, &resolutions);
    super::print_block(&formatter.format_hooks(&rows));
    Ok(())
}

/// Pairs resolutions, which follow manifest order, with their groups.
pub fn hook_rows(manifest: &Manifest, resolutions: &[Resolution]) -> Vec<HookRow> {
    manifest
        .entries()
        .zip(resolutions)
        .map(|((group, _), resolution)| {
            let entry = resolution.entry();
            HookRow {
                repo: group.repo.clone(),
                rev: group.rev.clone(),
                id: entry.id.clone(),
                name: entry.display_name().to_string(),
                language: entry.language.clone(),
                stages: manifest
                    .stages_for(entry)
                    .map(|stages| stages.iter().map(|s| s.as_str().to_string()).collect())
                    .unwrap_or_default(),
                unavailable: match resolution {
                    Resolution::Ready(_) => None,
                    Resolution::Unavailable { reason, .. } => Some(reason.clone()),
                },
            }
        })
        .collect()
}
