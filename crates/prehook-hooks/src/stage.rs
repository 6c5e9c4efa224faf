// Rust guideline compliant 2026-02-06

//! Shared run setup for hook entry points.

use anyhow::{Context, Result};
use prehook_core::{load_manifest, Config, Stage, CONFIG_DIR};
use prehook_runner::{discover_root, ProviderStore, RunOptions, RunReport, Runner};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runs the hooks of `stage` against `files`.
///
/// Loads the runner configuration and manifest of the repository containing
/// `repo_path`. Missing providers are fetched on demand and `SKIP` is
/// honoured.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the working tree
/// * `stage` - Stage the run belongs to
/// * `files` - Changed paths relative to the repository root
/// * `manifest` - Manifest to use instead of the configured one
///
/// # Returns
///
/// The run report; hook failures are reported there, not as errors.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a Git working tree
/// - The configuration or manifest cannot be loaded
/// - A run-level failure occurs (see [`Runner::run`])
pub fn run_stage(
    repo_path: &Path,
    stage: Stage,
    files: &[String],
    manifest: Option<&Path>,
) -> Result<RunReport> {
    let root = discover_root(repo_path)?;
    let (config, configured) = load_config(&root)?;
    let manifest_path = manifest.map_or(configured, |path| root.join(path));
    let manifest = load_manifest(&manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;
    let store = ProviderStore::from_config(&config, &root);

    let mut options = RunOptions::for_stage(stage);
    options.fail_fast = config.fail_fast;
    options.fetch_missing = true;

    debug!(stage = %stage, files = files.len(), "Running hook stage");
    let report = Runner::new(&root, &manifest, &store, options).run(files)?;
    Ok(report)
}

pub(crate) fn load_config(root: &Path) -> Result<(Config, PathBuf)> {
    let config = Config::load(&root.join(CONFIG_DIR))?;
    let manifest_path = config.manifest_in(root);
    Ok((config, manifest_path))
}
