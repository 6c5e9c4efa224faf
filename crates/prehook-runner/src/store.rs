// Rust guideline compliant 2026-02-06

//! Local cache of provider checkouts.
//!
//! Each `(location, rev)` pair gets its own directory. A checkout is complete
//! once its definitions file exists; partial clones are staged next to the
//! final directory and renamed into place.

use crate::error::{Result, RunnerError};
use fs2::FileExt;
use prehook_core::{parse_definitions, Config, HookEntry, Provider, DEFINITIONS_FILE};
use sha2::{Digest, Sha256};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Lock file name inside the store root.
const LOCK_FILE: &str = ".lock";

/// Cache of provider checkouts rooted at one directory.
#[derive(Debug, Clone)]
pub struct ProviderStore {
    root: PathBuf,
}

impl ProviderStore {
    /// Creates a store rooted at `root`. Nothing is created on disk yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the store named by the configuration.
    ///
    /// Falls back to `<user cache dir>/prehook`, then to `.prehook/cache`
    /// under `repo_root`.
    pub fn from_config(config: &Config, repo_root: &Path) -> Self {
        let root = config
            .cache_dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("prehook")))
            .unwrap_or_else(|| repo_root.join(prehook_core::CONFIG_DIR).join("cache"));
        Self::new(root)
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the checkout of `provider`.
    pub fn checkout_dir(&self, provider: &Provider) -> PathBuf {
        let digest = Sha256::digest(provider.location.as_bytes());
        let hash: String = digest.iter().take(6).map(|b| format!("{:02x}", b)).collect();
        self.root
            .join(format!("{}-{}", slug(&provider.location), hash))
            .join(sanitize(&provider.rev))
    }

    /// Whether a complete checkout of `provider` exists.
    pub fn is_fetched(&self, provider: &Provider) -> bool {
        self.checkout_dir(provider).join(DEFINITIONS_FILE).is_file()
    }

    /// Reads the hook definitions published by `provider`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The provider has not been fetched
    /// - The definitions file is malformed
    pub fn definitions(&self, provider: &Provider) -> Result<Vec<HookEntry>> {
        let path = self.checkout_dir(provider).join(DEFINITIONS_FILE);
        let text = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RunnerError::ProviderUnavailable {
                    provider: provider.to_string(),
                    reason: "not fetched; run 'prehook install'".to_string(),
                }
            } else {
                RunnerError::Io(e)
            }
        })?;
        Ok(parse_definitions(&text)?)
    }

    /// Clones `provider` and checks out its pinned revision.
    ///
    /// Does nothing when a complete checkout already exists. Concurrent
    /// fetches are serialized through an exclusive lock on the store.
    ///
    /// # Returns
    ///
    /// The checkout directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store lock cannot be taken
    /// - Cloning fails or the revision does not exist
    /// - The provider publishes no definitions file
    pub fn fetch(&self, provider: &Provider) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.root.join(LOCK_FILE))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| RunnerError::Locked(e.to_string()))?;

        let result = self.fetch_locked(provider);

        let _ = lock_file.unlock();
        result
    }

    fn fetch_locked(&self, provider: &Provider) -> Result<PathBuf> {
        let dest = self.checkout_dir(provider);
        if dest.join(DEFINITIONS_FILE).is_file() {
            debug!(provider = %provider, "Provider already fetched");
            return Ok(dest);
        }

        let staging = staging_dir(&dest);
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(provider = %provider, "Fetching provider");
        checkout(provider, &staging).inspect_err(|_| {
            let _ = fs::remove_dir_all(&staging);
        })?;

        if !staging.join(DEFINITIONS_FILE).is_file() {
            let _ = fs::remove_dir_all(&staging);
            return Err(RunnerError::ProviderUnavailable {
                provider: provider.to_string(),
                reason: format!("no {} at {}", DEFINITIONS_FILE, provider.rev),
            });
        }

        fs::rename(&staging, &dest)?;
        Ok(dest)
    }

    /// Removes every checkout from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be removed.
    pub fn clean(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }
}

fn checkout(provider: &Provider, into: &Path) -> Result<()> {
    let repo = git2::Repository::clone(&provider.location, into).map_err(|e| {
        RunnerError::ProviderUnavailable {
            provider: provider.to_string(),
            reason: e.message().to_string(),
        }
    })?;

    let object = repo
        .revparse_single(&provider.rev)
        .map_err(|_| RunnerError::ProviderUnavailable {
            provider: provider.to_string(),
            reason: format!("revision '{}' not found", provider.rev),
        })?;
    let commit = object.peel_to_commit()?;

    let mut checkout = git2::build::CheckoutBuilder::new();
    checkout.force();
    repo.checkout_tree(commit.as_object(), Some(&mut checkout))?;
    repo.set_head_detached(commit.id())?;
    Ok(())
}

fn staging_dir(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    dest.with_file_name(name)
}

/// Last path segment of a location, sanitized.
fn slug(location: &str) -> String {
    let last = location
        .trim_end_matches('/')
        .trim_end_matches(".git")
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(location);
    sanitize(last)
}

fn sanitize(value: &str) -> String {
    let slug: String = value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if slug.is_empty() || slug.chars().all(|c| c == '.') {
        "_".to_string()
    } else {
        slug
    }
}
