// Rust guideline compliant 2026-02-06

//! Hook selection: which entries fire for a set of changed files.
//!
//! Patterns use search semantics (a match anywhere in the path counts),
//! matching how manifests are written in practice (`\.py$`, `^docs/`).

use crate::identify;
use crate::manifest::compile;
use crate::models::{HookEntry, Manifest, Stage};
use crate::Result;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::debug;

/// Compiled include/exclude pair.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl FileFilter {
    /// Compiles an include/exclude pair.
    ///
    /// Empty patterns are treated as absent. `field` prefixes error locations.
    ///
    /// # Errors
    ///
    /// Returns an error if either pattern fails to compile.
    pub fn new(files: Option<&str>, exclude: Option<&str>, field: &str) -> Result<Self> {
        let include = match files.filter(|p| !p.is_empty()) {
            Some(pattern) => Some(compile(&join_field(field, "files"), pattern)?),
            None => None,
        };
        let exclude = match exclude.filter(|p| !p.is_empty()) {
            Some(pattern) => Some(compile(&join_field(field, "exclude"), pattern)?),
            None => None,
        };
        Ok(Self { include, exclude })
    }

    /// The manifest-level filter (global `files` and Global Exclusion).
    ///
    /// # Errors
    ///
    /// Returns an error if a global pattern fails to compile.
    pub fn global(manifest: &Manifest) -> Result<Self> {
        Self::new(manifest.files.as_deref(), manifest.exclude.as_deref(), "")
    }

    /// Returns true when `path` passes the include pattern and escapes the
    /// exclude pattern.
    pub fn matches(&self, path: &str) -> bool {
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(path) {
                return false;
            }
        }
        self.include.as_ref().map_or(true, |re| re.is_match(path))
    }
}

fn join_field(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Tag requirements of one entry.
#[derive(Debug, Clone, Default)]
pub struct TypeFilter {
    all: Vec<String>,
    any: Vec<String>,
    none: Vec<String>,
}

impl TypeFilter {
    /// Builds the tag requirements of `entry`.
    pub fn from_entry(entry: &HookEntry) -> Self {
        Self {
            all: entry.types.clone().unwrap_or_default(),
            any: entry.types_or.clone().unwrap_or_default(),
            none: entry.exclude_types.clone().unwrap_or_default(),
        }
    }

    /// Returns true when `tags` satisfies every requirement.
    pub fn matches(&self, tags: &BTreeSet<&'static str>) -> bool {
        self.all.iter().all(|t| tags.contains(t.as_str()))
            && (self.any.is_empty() || self.any.iter().any(|t| tags.contains(t.as_str())))
            && !self.none.iter().any(|t| tags.contains(t.as_str()))
    }
}

/// A fixed set of changed files with their type tags.
///
/// Paths rejected by the manifest-level filter are dropped on construction
/// and can never reach a hook.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    paths: Vec<String>,
    tags: HashMap<String, BTreeSet<&'static str>>,
}

impl FileSet {
    /// Builds a file set, identifying files on disk under `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global pattern fails to compile.
    pub fn on_disk<I, S>(root: &Path, paths: I, manifest: &Manifest) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(paths, manifest, |path| identify::tags_for(root, path))
    }

    /// Builds a file set from paths alone, without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns an error if a global pattern fails to compile.
    pub fn from_paths<I, S>(paths: I, manifest: &Manifest) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(paths, manifest, |path| {
            let mut tags = identify::tags_from_path(path);
            if !tags.contains(identify::BINARY) {
                tags.insert(identify::TEXT);
            }
            tags
        })
    }

    fn build<I, S, F>(paths: I, manifest: &Manifest, identify: F) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> BTreeSet<&'static str>,
    {
        let global = FileFilter::global(manifest)?;
        let mut set = Self::default();

        for path in paths {
            let path = normalize(path.into());
            if set.tags.contains_key(&path) {
                continue;
            }
            if !global.matches(&path) {
                debug!(path = %path, "Excluded by manifest-level filter");
                continue;
            }
            set.tags.insert(path.clone(), identify(&path));
            set.paths.push(path);
        }

        Ok(set)
    }

    /// Paths in the order they were supplied.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Number of files in the set.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true when no file survived the manifest-level filter.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Tags of a path in the set.
    pub fn tags(&self, path: &str) -> Option<&BTreeSet<&'static str>> {
        self.tags.get(path)
    }
}

fn normalize(path: String) -> String {
    let path = path.replace('\\', "/");
    match path.strip_prefix("./") {
        Some(stripped) => stripped.to_string(),
        None => path,
    }
}

/// Compiled file requirements of one entry.
#[derive(Debug, Clone)]
pub struct HookSelector {
    files: FileFilter,
    types: TypeFilter,
}

impl HookSelector {
    /// Compiles the file requirements of `entry`.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern of the entry fails to compile.
    pub fn from_entry(entry: &HookEntry) -> Result<Self> {
        Ok(Self {
            files: FileFilter::new(entry.files.as_deref(), entry.exclude.as_deref(), &entry.id)?,
            types: TypeFilter::from_entry(entry),
        })
    }

    /// Files of `set` this entry applies to, in set order.
    pub fn candidates(&self, set: &FileSet) -> Vec<String> {
        set.paths()
            .iter()
            .filter(|path| self.files.matches(path))
            .filter(|path| set.tags(path).is_some_and(|tags| self.types.matches(tags)))
            .cloned()
            .collect()
    }
}

/// Why an entry does or does not fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// At least one file matched, or the entry always runs.
    Run,
    /// No file matched.
    NoFiles,
    /// The entry does not take part in the requested stage.
    OtherStage,
}

/// Selection outcome for one entry.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// The entry the decision is about.
    pub entry: &'a HookEntry,
    /// Files the entry applies to.
    pub files: Vec<String>,
    /// Whether and why the entry fires.
    pub decision: Decision,
}

impl Selection<'_> {
    /// Whether the entry fires.
    pub fn fires(&self) -> bool {
        self.decision == Decision::Run
    }
}

/// Returns true when `entry` takes part in `stage`.
pub fn stage_applies(manifest: &Manifest, entry: &HookEntry, stage: Stage) -> bool {
    manifest
        .stages_for(entry)
        .map_or(true, |stages| stages.contains(&stage))
}

/// Decides which of `entries` fire for `files` in `stage`.
///
/// # Arguments
///
/// * `manifest` - Manifest supplying `default_stages`
/// * `entries` - Entries in execution order; may be provider-resolved copies
/// * `files` - Changed files, already passed through the manifest-level filter
/// * `stage` - Stage of the run
///
/// # Returns
///
/// One selection per entry, in the order given.
///
/// # Errors
///
/// Returns an error if an entry pattern fails to compile.
pub fn select_entries<'a, I>(
    manifest: &Manifest,
    entries: I,
    files: &FileSet,
    stage: Stage,
) -> Result<Vec<Selection<'a>>>
where
    I: IntoIterator<Item = &'a HookEntry>,
{
    let mut selections = Vec::new();

    for entry in entries {
        if !stage_applies(manifest, entry, stage) {
            selections.push(Selection {
                entry,
                files: Vec::new(),
                decision: Decision::OtherStage,
            });
            continue;
        }

        let candidates = HookSelector::from_entry(entry)?.candidates(files);
        let decision = if candidates.is_empty() && !entry.always_run() {
            Decision::NoFiles
        } else {
            Decision::Run
        };
        debug!(
            hook = %entry.id,
            files = candidates.len(),
            ?decision,
            "Selected"
        );
        selections.push(Selection {
            entry,
            files: candidates,
            decision,
        });
    }

    Ok(selections)
}

impl Manifest {
    /// Decides which manifest entries fire, using the entries as declared.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn select<'a>(&'a self, files: &FileSet, stage: Stage) -> Result<Vec<Selection<'a>>> {
        select_entries(self, self.entries().map(|(_, hook)| hook), files, stage)
    }
}
