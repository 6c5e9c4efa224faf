// Rust guideline compliant 2026-02-06

//! Command implementations for the prehook CLI.

pub mod clean;
pub mod hooks;
pub mod install;
pub mod list;
pub mod run;
pub mod uninstall;
pub mod validate_manifest;

use anyhow::{Context as _, Result};
use prehook_core::{load_manifest, Config, Manifest, CONFIG_DIR};
use prehook_runner::{discover_root, ProviderStore};
use std::path::{Path, PathBuf};

/// Repository, configuration and manifest location shared by commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working tree root, when run inside a repository.
    pub repo_root: Option<PathBuf>,
    /// Runner configuration (defaults outside a repository).
    pub config: Config,
    /// Manifest path after applying `--config`.
    pub manifest_path: PathBuf,
    /// Absolute manifest path given with `--config`, if any.
    pub manifest_override: Option<PathBuf>,
}

impl Context {
    /// Discovers the repository around `cwd` and loads its configuration.
    ///
    /// # Arguments
    ///
    /// * `cwd` - Directory the command runs in
    /// * `manifest_override` - Manifest path given with `--config`
    ///
    /// # Errors
    ///
    /// Returns an error if `.prehook/config.toml` exists but is invalid.
    pub fn discover(cwd: &Path, manifest_override: Option<&Path>) -> Result<Self> {
        let repo_root = discover_root(cwd).ok();
        let config = match &repo_root {
            Some(root) => Config::load(&root.join(CONFIG_DIR))?,
            None => Config::load(&cwd.join(CONFIG_DIR))?,
        };
        let base = repo_root.as_deref().unwrap_or(cwd);
        let manifest_override = manifest_override.map(|path| cwd.join(path));
        let manifest_path = manifest_override
            .clone()
            .unwrap_or_else(|| config.manifest_in(base));

        Ok(Self {
            repo_root,
            config,
            manifest_path,
            manifest_override,
        })
    }

    /// Working tree root.
    ///
    /// # Errors
    ///
    /// Returns an error outside a Git working tree.
    pub fn require_repo(&self) -> Result<&Path> {
        self.repo_root
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Not a git repository. Run 'git init' first."))
    }

    /// Loads and validates the manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest is missing or invalid.
    pub fn manifest(&self) -> Result<Manifest> {
        load_manifest(&self.manifest_path)
            .with_context(|| format!("Failed to load {}", self.manifest_path.display()))
    }

    /// Provider store named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error outside a Git working tree.
    pub fn store(&self) -> Result<ProviderStore> {
        Ok(ProviderStore::from_config(&self.config, self.require_repo()?))
    }
}

/// Prints formatter output, ending with exactly one newline.
pub(crate) fn print_block(text: &str) {
    if text.is_empty() {
        return;
    }
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
