// Rust guideline compliant 2026-02-06

//! Data model of a hook manifest.
//!
//! The model mirrors the YAML document one to one. Defaults are applied by
//! accessor methods rather than at parse time so that a parsed manifest
//! always compares equal to a second parse of the same text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Location string that marks a group whose hooks are declared inline.
pub const LOCAL_REPO: &str = "local";

/// Git hook event a run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Before a commit is recorded.
    #[serde(alias = "commit")]
    PreCommit,
    /// Before a merge commit is recorded.
    #[serde(alias = "merge-commit")]
    PreMergeCommit,
    /// Before refs are pushed.
    #[serde(alias = "push")]
    PrePush,
    /// While the commit message template is prepared.
    PrepareCommitMsg,
    /// After the commit message is written.
    CommitMsg,
    /// After a checkout.
    PostCheckout,
    /// After a commit is recorded.
    PostCommit,
    /// After a merge.
    PostMerge,
    /// Only when requested explicitly with `--hook-stage manual`.
    Manual,
}

impl Stage {
    /// All stages in declaration order.
    pub const ALL: [Stage; 9] = [
        Stage::PreCommit,
        Stage::PreMergeCommit,
        Stage::PrePush,
        Stage::PrepareCommitMsg,
        Stage::CommitMsg,
        Stage::PostCheckout,
        Stage::PostCommit,
        Stage::PostMerge,
        Stage::Manual,
    ];

    /// Returns the canonical kebab-case name, which is also the Git hook file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::PreCommit => "pre-commit",
            Stage::PreMergeCommit => "pre-merge-commit",
            Stage::PrePush => "pre-push",
            Stage::PrepareCommitMsg => "prepare-commit-msg",
            Stage::CommitMsg => "commit-msg",
            Stage::PostCheckout => "post-checkout",
            Stage::PostCommit => "post-commit",
            Stage::PostMerge => "post-merge",
            Stage::Manual => "manual",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "commit" => return Ok(Stage::PreCommit),
            "merge-commit" => return Ok(Stage::PreMergeCommit),
            "push" => return Ok(Stage::PrePush),
            _ => {}
        }
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("unknown stage '{}'", s))
    }
}

/// A single hook declaration inside a group.
///
/// The same shape is used for the definitions a provider publishes in its
/// `.pre-commit-hooks.yaml`; there `name`, `entry` and `language` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HookEntry {
    /// Identifier, unique within the provider.
    pub id: String,
    /// Display name shown in run output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Command to invoke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Runtime tag (`system`, `script`, `python`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Inclusion pattern for file paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// Exclusion pattern for file paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Every listed tag must be present on a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// At least one listed tag must be present on a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types_or: Option<Vec<String>>,
    /// No listed tag may be present on a file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_types: Option<Vec<String>>,
    /// Stages the hook takes part in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<Stage>>,
    /// Extra arguments placed between the entry and the file names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// Run even when no file matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_run: Option<bool>,
    /// Append matching file names to the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_filenames: Option<bool>,
    /// Print captured output even when the hook passes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keys this runner does not interpret (`additional_dependencies`, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl HookEntry {
    /// Creates an entry with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Display name, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Extra arguments, empty when none are declared.
    pub fn args(&self) -> &[String] {
        self.args.as_deref().unwrap_or(&[])
    }

    /// Whether file names are appended to the command line (default `true`).
    pub fn pass_filenames(&self) -> bool {
        self.pass_filenames.unwrap_or(true)
    }

    /// Whether the hook runs without matching files (default `false`).
    pub fn always_run(&self) -> bool {
        self.always_run.unwrap_or(false)
    }

    /// Overlays every field set on `overrides` onto `self`.
    ///
    /// Used to combine a provider definition with the manifest entry that
    /// references it; the manifest wins.
    pub fn overlay(&self, overrides: &HookEntry) -> HookEntry {
        fn pick<T: Clone>(base: &Option<T>, top: &Option<T>) -> Option<T> {
            top.clone().or_else(|| base.clone())
        }

        let mut extra = self.extra.clone();
        extra.extend(overrides.extra.clone());

        HookEntry {
            id: self.id.clone(),
            name: pick(&self.name, &overrides.name),
            entry: pick(&self.entry, &overrides.entry),
            language: pick(&self.language, &overrides.language),
            files: pick(&self.files, &overrides.files),
            exclude: pick(&self.exclude, &overrides.exclude),
            types: pick(&self.types, &overrides.types),
            types_or: pick(&self.types_or, &overrides.types_or),
            exclude_types: pick(&self.exclude_types, &overrides.exclude_types),
            stages: pick(&self.stages, &overrides.stages),
            args: pick(&self.args, &overrides.args),
            always_run: pick(&self.always_run, &overrides.always_run),
            pass_filenames: pick(&self.pass_filenames, &overrides.pass_filenames),
            verbose: pick(&self.verbose, &overrides.verbose),
            description: pick(&self.description, &overrides.description),
            extra,
        }
    }
}

/// A reference to an external source of hook definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Provider {
    /// Repository location (URL or path).
    pub location: String,
    /// Pinned revision, compared only for equality.
    pub rev: String,
}

impl Provider {
    /// Creates a provider reference.
    pub fn new(location: impl Into<String>, rev: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            rev: rev.into(),
        }
    }

    /// Returns true when the provider is pinned to exactly `rev`.
    pub fn is_pinned_to(&self, rev: &str) -> bool {
        self.rev == rev
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.location, self.rev)
    }
}

/// A provider reference together with the hooks used from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookGroup {
    /// Provider location, or `local`.
    pub repo: String,
    /// Pinned revision; required unless `repo` is `local`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    /// Hooks taken from this provider, in execution order.
    #[serde(default)]
    pub hooks: Vec<HookEntry>,
}

impl HookGroup {
    /// Whether the hooks of this group are declared inline.
    pub fn is_local(&self) -> bool {
        self.repo == LOCAL_REPO
    }

    /// Provider reference for remote groups.
    pub fn provider(&self) -> Option<Provider> {
        if self.is_local() {
            return None;
        }
        self.rev
            .as_ref()
            .map(|rev| Provider::new(self.repo.clone(), rev.clone()))
    }
}

/// The manifest document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Provider groups in execution order.
    #[serde(default)]
    pub repos: Vec<HookGroup>,
    /// Global exclusion pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    /// Global inclusion pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// Abort the batch on the first failing hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
    /// Stages applied to hooks that do not list their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_stages: Option<Vec<Stage>>,
    /// Keys this runner does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Manifest {
    /// Whether the first failure aborts the batch (default `true`).
    pub fn fail_fast(&self) -> bool {
        self.fail_fast.unwrap_or(true)
    }

    /// Iterates over every hook entry in manifest order, paired with its group.
    pub fn entries(&self) -> impl Iterator<Item = (&HookGroup, &HookEntry)> {
        self.repos
            .iter()
            .flat_map(|group| group.hooks.iter().map(move |hook| (group, hook)))
    }

    /// Stages an entry takes part in, honouring `default_stages`.
    ///
    /// `None` means the entry takes part in every stage.
    pub fn stages_for<'a>(&'a self, entry: &'a HookEntry) -> Option<&'a [Stage]> {
        entry
            .stages
            .as_deref()
            .or(self.default_stages.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_from_str_accepts_legacy_names() {
        assert_eq!("commit".parse::<Stage>().unwrap(), Stage::PreCommit);
        assert_eq!("push".parse::<Stage>().unwrap(), Stage::PrePush);
        assert_eq!("manual".parse::<Stage>().unwrap(), Stage::Manual);
        assert!("pre-rebase".parse::<Stage>().is_err());
    }

    #[test]
    fn test_stage_display_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(stage.to_string().parse::<Stage>().unwrap(), stage);
        }
    }

    #[test]
    fn test_provider_pin_equality_is_exact() {
        let provider = Provider::new("https://github.com/pre-commit/pre-commit-hooks", "v4.5.0");
        assert!(provider.is_pinned_to("v4.5.0"));
        assert!(!provider.is_pinned_to("4.5.0"));
        assert!(!provider.is_pinned_to("v4.5.0 "));
    }

    #[test]
    fn test_local_group_has_no_provider() {
        let group = HookGroup {
            repo: LOCAL_REPO.to_string(),
            rev: None,
            hooks: vec![],
        };
        assert!(group.is_local());
        assert!(group.provider().is_none());
    }

    #[test]
    fn test_overlay_prefers_manifest_fields() {
        let mut definition = HookEntry::new("black");
        definition.name = Some("black".to_string());
        definition.entry = Some("black".to_string());
        definition.files = Some(r"\.pyi?$".to_string());

        let mut reference = HookEntry::new("black");
        reference.args = Some(vec!["--line-length=100".to_string()]);
        reference.files = Some(r"^src/".to_string());

        let merged = definition.overlay(&reference);
        assert_eq!(merged.entry.as_deref(), Some("black"));
        assert_eq!(merged.files.as_deref(), Some("^src/"));
        assert_eq!(merged.args(), ["--line-length=100".to_string()]);
    }

    #[test]
    fn test_entry_defaults() {
        let entry = HookEntry::new("x");
        assert_eq!(entry.display_name(), "x");
        assert!(entry.pass_filenames());
        assert!(!entry.always_run());
        assert!(entry.args().is_empty());
    }
}
