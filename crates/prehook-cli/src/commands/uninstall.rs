// Rust guideline compliant 2026-02-06

//! Implementation of the `prehook uninstall` command.

use crate::commands::install::{hooks_dir, is_ours, legacy_path, HookType};
use crate::commands::Context;
use crate::terminal::{print_info, print_success};
use anyhow::Result;
use clap::ValueEnum;
use std::fs;

/// Removes hook scripts written by prehook and restores `.legacy` hooks.
///
/// Hook files prehook did not write are left alone.
///
/// # Errors
///
/// Returns an error if the current directory is not inside a Git repository
/// or a hook file cannot be removed or renamed.
pub fn execute(ctx: &Context) -> Result<()> {
    let hooks_dir = hooks_dir(ctx.require_repo()?)?;
    let mut removed = 0;

    for hook_type in HookType::value_variants() {
        let path = hooks_dir.join(hook_type.as_str());
        if !path.exists() || !is_ours(&path) {
            continue;
        }
        fs::remove_file(&path)?;
        removed += 1;
        print_success(&format!("Removed {}", path.display()));

        let legacy = legacy_path(&path);
        if legacy.exists() {
            fs::rename(&legacy, &path)?;
            print_info(&format!("Restored previous hook at {}", path.display()));
        }
    }

    if removed == 0 {
        print_info("No prehook scripts installed");
    }
    Ok(())
}
