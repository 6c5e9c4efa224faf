// Rust guideline compliant 2026-02-06

//! Implementation of the `prehook clean` command.

use crate::commands::Context;
use crate::terminal::print_success;
use anyhow::Result;

/// Removes every provider checkout from the store.
///
/// # Errors
///
/// Returns an error outside a Git working tree or if the store cannot be
/// removed.
pub fn execute(ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    store.clean()?;
    print_success(&format!("Cleaned {}", store.root().display()));
    Ok(())
}
