// Rust guideline compliant 2026-02-06

//! Resolution of manifest entries into runnable hooks.
//!
//! Local entries are complete as written. Remote entries only reference a
//! definition by id; the provider's definition supplies the command and the
//! manifest entry overrides any field it sets.

use crate::error::{Result, RunnerError};
use crate::store::ProviderStore;
use prehook_core::{HookEntry, Manifest, Provider};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// A hook ready to execute.
#[derive(Debug, Clone)]
pub struct ResolvedHook {
    /// Effective entry after overlaying the manifest on the definition.
    pub entry: HookEntry,
    /// Provider the definition came from; `None` for local hooks.
    pub provider: Option<Provider>,
    /// Provider checkout, used to resolve `script` entries.
    pub workdir: Option<PathBuf>,
}

/// Result of resolving one manifest entry.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The hook can run.
    Ready(ResolvedHook),
    /// The provider or definition is missing; the entry is reported as an error.
    Unavailable {
        /// Manifest entry as declared.
        entry: HookEntry,
        /// Why the entry cannot run.
        reason: String,
    },
}

impl Resolution {
    /// Effective entry, or the declared entry when unavailable.
    pub fn entry(&self) -> &HookEntry {
        match self {
            Resolution::Ready(hook) => &hook.entry,
            Resolution::Unavailable { entry, .. } => entry,
        }
    }
}

/// Resolves every manifest entry in manifest order.
///
/// Provider definitions are read once per provider. When `fetch_missing` is
/// set, providers absent from the store are fetched first.
///
/// # Errors
///
/// Only store-level failures that affect every provider (such as a lock that
/// cannot be taken) are returned; problems with a single provider become
/// [`Resolution::Unavailable`] entries.
pub fn resolve_all(
    manifest: &Manifest,
    store: &ProviderStore,
    fetch_missing: bool,
) -> Result<Vec<Resolution>> {
    let mut definitions: HashMap<Provider, std::result::Result<Vec<HookEntry>, String>> =
        HashMap::new();
    let mut resolutions = Vec::new();

    for (group, hook) in manifest.entries() {
        let Some(provider) = group.provider() else {
            resolutions.push(Resolution::Ready(ResolvedHook {
                entry: hook.clone(),
                provider: None,
                workdir: None,
            }));
            continue;
        };

        if !definitions.contains_key(&provider) {
            let loaded = load_definitions(store, &provider, fetch_missing)?;
            definitions.insert(provider.clone(), loaded);
        }

        let resolution = match &definitions[&provider] {
            Err(reason) => Resolution::Unavailable {
                entry: hook.clone(),
                reason: reason.clone(),
            },
            Ok(defs) => match defs.iter().find(|def| def.id == hook.id) {
                Some(def) => Resolution::Ready(ResolvedHook {
                    entry: def.overlay(hook),
                    workdir: Some(store.checkout_dir(&provider)),
                    provider: Some(provider.clone()),
                }),
                None => {
                    let err = RunnerError::UnknownHook {
                        provider: provider.to_string(),
                        id: hook.id.clone(),
                    };
                    warn!(hook = %hook.id, provider = %provider, "Unknown hook id");
                    Resolution::Unavailable {
                        entry: hook.clone(),
                        reason: err.to_string(),
                    }
                }
            },
        };
        resolutions.push(resolution);
    }

    Ok(resolutions)
}

fn load_definitions(
    store: &ProviderStore,
    provider: &Provider,
    fetch_missing: bool,
) -> Result<std::result::Result<Vec<HookEntry>, String>> {
    if fetch_missing && !store.is_fetched(provider) {
        match store.fetch(provider) {
            Ok(_) => {}
            Err(RunnerError::Locked(msg)) => return Err(RunnerError::Locked(msg)),
            Err(e) => {
                warn!(provider = %provider, error = %e, "Provider fetch failed");
                return Ok(Err(e.to_string()));
            }
        }
    }

    match store.definitions(provider) {
        Ok(defs) => Ok(Ok(defs)),
        Err(e) => {
            warn!(provider = %provider, error = %e, "Provider unavailable");
            Ok(Err(e.to_string()))
        }
    }
}
