// Rust guideline compliant 2026-02-06

//! Implementation of the `prehook install` command.
//!
//! Writes Git hook scripts that call back into `prehook hooks <stage>`.

use crate::commands::Context;
use crate::terminal::{print_success, print_warning};
use anyhow::{Context as _, Result};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Line identifying scripts written by prehook.
pub const MARKER: &str = "# Installed by prehook; do not edit.";

/// Git hooks prehook can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HookType {
    /// Runs before a commit is recorded.
    PreCommit,
    /// Runs before refs are pushed.
    PrePush,
}

impl HookType {
    /// Git hook file name, which is also the `prehook hooks` action.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookType::PreCommit => "pre-commit",
            HookType::PrePush => "pre-push",
        }
    }
}

/// Installs hook scripts into the repository of `ctx`.
///
/// A hook file not written by prehook is moved to `<stage>.legacy` first,
/// unless `overwrite` is set. A `--config` manifest is baked into the script. Remote providers named by the manifest are
/// fetched so the first commit does not pay for it.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `hook_types` - Hooks to install
/// * `overwrite` - Replace foreign hooks instead of keeping them as `.legacy`
///
/// # Errors
///
/// Returns an error if:
/// - The current directory is not inside a Git repository
/// - A hook file cannot be written
/// - A provider cannot be fetched
pub fn execute(ctx: &Context, hook_types: &[HookType], overwrite: bool) -> Result<()> {
    let root = ctx.require_repo()?;
    let hooks_dir = hooks_dir(root)?;
    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("Failed to create {}", hooks_dir.display()))?;

    let exe = std::env::current_exe().context("Failed to locate the prehook executable")?;
    for hook_type in hook_types {
        let path = hooks_dir.join(hook_type.as_str());
        if path.exists() && !is_ours(&path) {
            if overwrite {
                print_warning(&format!("Overwriting existing {}", path.display()));
            } else {
                let legacy = legacy_path(&path);
                fs::rename(&path, &legacy)?;
                print_warning(&format!(
                    "Existing {} hook moved to {}",
                    hook_type.as_str(),
                    legacy.display()
                ));
            }
        }
        install_hook(
            &path,
            &exe,
            ctx.manifest_override.as_deref(),
            hook_type.as_str(),
        )?;
        info!(hook = hook_type.as_str(), "Installed hook script");
        print_success(&format!("prehook installed at {}", path.display()));
    }

    if ctx.manifest_path.exists() {
        let manifest = ctx.manifest()?;
        let store = ctx.store()?;
        for group in &manifest.repos {
            if let Some(provider) = group.provider() {
                store.fetch(&provider)?;
            }
        }
    }

    Ok(())
}

/// Hooks directory of the repository at `root`.
pub(crate) fn hooks_dir(root: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(root)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;
    Ok(repo.path().join("hooks"))
}

/// Whether the hook file at `path` was written by prehook.
pub(crate) fn is_ours(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|content| content.lines().any(|line| line == MARKER))
        .unwrap_or(false)
}

pub(crate) fn legacy_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".legacy");
    path.with_file_name(name)
}

fn install_hook(path: &Path, exe: &Path, manifest: Option<&Path>, action: &str) -> Result<()> {
    let hook_content = script(exe, manifest, action);
    fs::write(path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

fn quote(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
}

fn script(exe: &Path, manifest: Option<&Path>, action: &str) -> String {
    let config = manifest
        .map(|path| format!(" --config {}", quote(path)))
        .unwrap_or_default();
    format!(
        "#!/bin/sh\n{}\nexec {}{} hooks {} \"$@\"\n",
        MARKER,
        quote(exe),
        config,
        action
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_script_calls_back_into_prehook() {
        let content = script(Path::new("/opt/bin/prehook"), None, "pre-push");
        assert!(content.starts_with("#!/bin/sh\n"));
        assert!(content.contains(MARKER));
        assert!(content.ends_with("exec '/opt/bin/prehook' hooks pre-push \"$@\"\n"));
    }

    #[test]
    fn test_script_quotes_exe_path() {
        let content = script(Path::new("/it's/prehook"), None, "pre-commit");
        assert!(content.contains(r"exec '/it'\''s/prehook'"));
    }

    #[test]
    fn test_script_keeps_manifest_override() {
        let content = script(
            Path::new("/opt/bin/prehook"),
            Some(Path::new("/repo/ci/hooks.yaml")),
            "pre-commit",
        );
        assert!(content.ends_with(
            "exec '/opt/bin/prehook' --config '/repo/ci/hooks.yaml' hooks pre-commit \"$@\"\n"
        ));
    }

    #[test]
    fn test_is_ours_and_legacy_path() {
        let temp_dir = TempDir::new().unwrap();
        let ours = temp_dir.path().join("pre-commit");
        fs::write(&ours, script(Path::new("prehook"), None, "pre-commit")).unwrap();
        assert!(is_ours(&ours));

        let foreign = temp_dir.path().join("pre-push");
        fs::write(&foreign, "#!/bin/sh\nmake lint\n").unwrap();
        assert!(!is_ours(&foreign));
        assert!(!is_ours(&temp_dir.path().join("missing")));

        assert_eq!(legacy_path(&foreign), temp_dir.path().join("pre-push.legacy"));
    }
}
