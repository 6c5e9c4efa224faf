// Rust guideline compliant 2026-02-06

//! Manifest loading and structural validation.

use crate::identify;
use crate::models::{HookEntry, Manifest};
use crate::{Error, Result};
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Default manifest file name at the repository root.
pub const DEFAULT_MANIFEST: &str = ".pre-commit-config.yaml";

/// File name of the hook definitions a provider publishes.
pub const DEFINITIONS_FILE: &str = ".pre-commit-hooks.yaml";

/// Parses a manifest document without validating it.
///
/// # Errors
///
/// Returns an error if the text is not valid YAML or does not have the
/// manifest shape.
pub fn parse_manifest(text: &str) -> Result<Manifest> {
    let manifest: Manifest = serde_yaml::from_str(text)?;
    Ok(manifest)
}

/// Reads, parses and validates the manifest at `path`.
///
/// # Arguments
///
/// * `path` - Path to the manifest file
///
/// # Returns
///
/// The validated manifest.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed
/// - Validation fails (see [`Manifest::validate`])
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::InvalidManifest(format!("{} not found", path.display()))
        } else {
            Error::Io(e)
        }
    })?;
    let manifest = parse_manifest(&text)?;
    manifest.validate()?;
    debug!(
        path = %path.display(),
        groups = manifest.repos.len(),
        "Loaded manifest"
    );
    Ok(manifest)
}

/// Parses a provider's hook definitions file.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, or a definition lacks `name`,
/// `entry` or `language`.
pub fn parse_definitions(text: &str) -> Result<Vec<HookEntry>> {
    let definitions: Vec<HookEntry> = serde_yaml::from_str(text)?;
    for (idx, def) in definitions.iter().enumerate() {
        let field = format!("definitions[{}]", idx);
        if def.id.trim().is_empty() {
            return Err(Error::InvalidManifest(format!("{}: id cannot be empty", field)));
        }
        for (key, value) in [
            ("name", &def.name),
            ("entry", &def.entry),
            ("language", &def.language),
        ] {
            if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
                return Err(Error::InvalidManifest(format!(
                    "{} ('{}'): {} is required",
                    field, def.id, key
                )));
            }
        }
        validate_entry_patterns(def, &field)?;
    }
    Ok(definitions)
}

/// Compiles a pattern, attributing failures to `field`.
pub(crate) fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        field: field.to_string(),
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

impl Manifest {
    /// Validates manifest structure.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A hook id is empty
    /// - A remote group has no `rev`, or a local group has one
    /// - A local hook has no `entry`
    /// - Any pattern fails to compile
    /// - A type tag is unknown
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = &self.exclude {
            compile("exclude", pattern)?;
        }
        if let Some(pattern) = &self.files {
            compile("files", pattern)?;
        }
        for key in self.extra.keys() {
            warn!(key = %key, "Ignoring unsupported manifest key");
        }

        for (group_idx, group) in self.repos.iter().enumerate() {
            let group_field = format!("repos[{}]", group_idx);

            if group.repo.trim().is_empty() {
                return Err(Error::InvalidManifest(format!(
                    "{}: repo cannot be empty",
                    group_field
                )));
            }

            match (&group.rev, group.is_local()) {
                (Some(_), true) => {
                    return Err(Error::InvalidManifest(format!(
                        "{}: local hooks cannot have a rev",
                        group_field
                    )));
                }
                (None, false) => {
                    return Err(Error::InvalidManifest(format!(
                        "{} ({}): rev is required",
                        group_field, group.repo
                    )));
                }
                (Some(rev), false) if rev.trim().is_empty() => {
                    return Err(Error::InvalidManifest(format!(
                        "{} ({}): rev cannot be empty",
                        group_field, group.repo
                    )));
                }
                _ => {}
            }

            if group.hooks.is_empty() {
                return Err(Error::InvalidManifest(format!(
                    "{} ({}): at least one hook is required",
                    group_field, group.repo
                )));
            }

            for (hook_idx, hook) in group.hooks.iter().enumerate() {
                let field = format!("{}.hooks[{}]", group_field, hook_idx);

                if hook.id.trim().is_empty() {
                    return Err(Error::InvalidManifest(format!("{}: id cannot be empty", field)));
                }

                if group.is_local() && hook.entry.as_deref().map_or(true, |e| e.trim().is_empty())
                {
                    return Err(Error::InvalidManifest(format!(
                        "{} ('{}'): local hooks require an entry",
                        field, hook.id
                    )));
                }

                validate_entry_patterns(hook, &field)?;
            }
        }

        Ok(())
    }
}

fn validate_entry_patterns(hook: &HookEntry, field: &str) -> Result<()> {
    if let Some(pattern) = &hook.files {
        compile(&format!("{}.files", field), pattern)?;
    }
    if let Some(pattern) = &hook.exclude {
        compile(&format!("{}.exclude", field), pattern)?;
    }

    for (key, tags) in [
        ("types", &hook.types),
        ("types_or", &hook.types_or),
        ("exclude_types", &hook.exclude_types),
    ] {
        for tag in tags.iter().flatten() {
            if !identify::is_known_tag(tag) {
                return Err(Error::UnknownTypeTag {
                    field: format!("{}.{}", field, key),
                    tag: tag.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = parse_manifest(
            r#"
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: check-json
"#,
        )
        .unwrap();
        assert_eq!(manifest.repos.len(), 1);
        assert_eq!(manifest.repos[0].hooks[0].id, "check-json");
        manifest.validate().unwrap();
    }

    #[test]
    fn test_remote_group_requires_rev() {
        let manifest = parse_manifest(
            r#"
repos:
  - repo: https://github.com/psf/black
    hooks:
      - id: black
"#,
        )
        .unwrap();
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("rev is required"));
    }

    #[test]
    fn test_local_group_rejects_rev() {
        let manifest = parse_manifest(
            r#"
repos:
  - repo: local
    rev: v1
    hooks:
      - id: x
        entry: "true"
"#,
        )
        .unwrap();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_local_hook_requires_entry() {
        let manifest = parse_manifest(
            r#"
repos:
  - repo: local
    hooks:
      - id: validate
        name: Validate
"#,
        )
        .unwrap();
        let err = manifest.validate().unwrap_err();
        assert!(err.to_string().contains("require an entry"));
    }

    #[test]
    fn test_bad_pattern_names_field() {
        let manifest = parse_manifest(
            r#"
exclude: "^(legacy/"
repos: []
"#,
        )
        .unwrap();
        match manifest.validate().unwrap_err() {
            Error::InvalidPattern { field, .. } => assert_eq!(field, "exclude"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_type_tag() {
        let manifest = parse_manifest(
            r#"
repos:
  - repo: local
    hooks:
      - id: x
        entry: "true"
        types: [cobol]
"#,
        )
        .unwrap();
        assert!(matches!(
            manifest.validate().unwrap_err(),
            Error::UnknownTypeTag { .. }
        ));
    }

    #[test]
    fn test_parse_definitions_requires_entry() {
        let err = parse_definitions(
            r#"
- id: trailing-whitespace
  name: Trim trailing whitespace
  language: python
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("entry is required"));
    }

    #[test]
    fn test_unsupported_keys_are_kept() {
        let manifest = parse_manifest(
            r#"
minimum_pre_commit_version: "3.0.0"
repos:
  - repo: local
    hooks:
      - id: x
        entry: "true"
        additional_dependencies: [requests]
"#,
        )
        .unwrap();
        assert!(manifest.extra.contains_key("minimum_pre_commit_version"));
        assert!(manifest.repos[0].hooks[0]
            .extra
            .contains_key("additional_dependencies"));
        manifest.validate().unwrap();
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(matches!(
            parse_manifest("repos: [").unwrap_err(),
            Error::Yaml(_)
        ));
    }
}
