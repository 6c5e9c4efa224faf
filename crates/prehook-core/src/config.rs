// Rust guideline compliant 2026-02-06

//! Runner configuration.

use crate::manifest::DEFAULT_MANIFEST;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory, relative to the repository root, holding runner configuration.
pub const CONFIG_DIR: &str = ".prehook";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable format with status lines and tables.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for runner behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Manifest path, relative to the repository root.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    /// Provider store location; the user cache directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Overrides the manifest's `fail_fast` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,

    /// Whether colored output is allowed.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            cache_dir: None,
            output_format: OutputFormat::default(),
            fail_fast: None,
            color: default_color(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.prehook/config.toml`
    /// 3. Environment variables with `PREHOOK_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Path to the `.prehook` directory
    ///
    /// # Returns
    ///
    /// A Config struct with values from file and environment variables applied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PREHOOK_MANIFEST_PATH` - Manifest path
    /// - `PREHOOK_CACHE_DIR` - Provider store location
    /// - `PREHOOK_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `PREHOOK_FAIL_FAST` - Fail-fast override (true/false)
    /// - `PREHOOK_COLOR` - Colored output (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PREHOOK_MANIFEST_PATH") {
            self.manifest_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("PREHOOK_CACHE_DIR") {
            self.cache_dir = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("PREHOOK_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "PREHOOK_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("PREHOOK_FAIL_FAST") {
            self.fail_fast = Some(val.parse().map_err(|_| {
                crate::Error::InvalidConfig("PREHOOK_FAIL_FAST must be true or false".to_string())
            })?);
        }

        if let Ok(val) = std::env::var("PREHOOK_COLOR") {
            self.color = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("PREHOOK_COLOR must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// `manifest_path` is not looked up here; it is relative to the
    /// repository root, not the process directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `manifest_path` is empty.
    fn validate(&self) -> Result<()> {
        if self.manifest_path.as_os_str().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "manifest_path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolves the manifest path against the repository root.
    pub fn manifest_in(&self, repo_root: &Path) -> PathBuf {
        if self.manifest_path.is_absolute() {
            self.manifest_path.clone()
        } else {
            repo_root.join(&self.manifest_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("PREHOOK_MANIFEST_PATH");
        std::env::remove_var("PREHOOK_CACHE_DIR");
        std::env::remove_var("PREHOOK_OUTPUT_FORMAT");
        std::env::remove_var("PREHOOK_FAIL_FAST");
        std::env::remove_var("PREHOOK_COLOR");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.manifest_path, PathBuf::from(".pre-commit-config.yaml"));
        assert!(config.cache_dir.is_none());
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.fail_fast.is_none());
        assert!(config.color);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
manifest_path = "ci/hooks.yaml"
cache_dir = "/tmp/prehook-cache"
output_format = "json"
fail_fast = false
color = false
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.manifest_path, PathBuf::from("ci/hooks.yaml"));
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/prehook-cache")));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.fail_fast, Some(false));
        assert!(!config.color);
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "output_format = [").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_empty_manifest_path() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "manifest_path = \"\"").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("PREHOOK_OUTPUT_FORMAT", "plain");
        std::env::set_var("PREHOOK_FAIL_FAST", "false");
        std::env::set_var("PREHOOK_COLOR", "false");
        std::env::set_var("PREHOOK_MANIFEST_PATH", "hooks.yaml");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.fail_fast, Some(false));
        assert!(!config.color);
        assert_eq!(config.manifest_path, PathBuf::from("hooks.yaml"));

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("PREHOOK_OUTPUT_FORMAT", "xml");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("PREHOOK_FAIL_FAST", "maybe");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "output_format = \"json\"").unwrap();

        std::env::set_var("PREHOOK_OUTPUT_FORMAT", "table");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);

        clear_all_env_vars();
    }

    #[test]
    fn test_manifest_path_not_checked_against_process_dir() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        // `src` is a directory under the test's working directory.
        assert!(Path::new("src").is_dir());
        std::fs::write(dir.join("config.toml"), "manifest_path = \"src\"").unwrap();

        let config = Config::load(&dir).unwrap();
        assert_eq!(config.manifest_in(temp_dir.path()), temp_dir.path().join("src"));
    }

    #[test]
    fn test_manifest_in_resolves_relative_paths() {
        let config = Config::default();
        let resolved = config.manifest_in(Path::new("/repo"));
        assert_eq!(resolved, PathBuf::from("/repo/.pre-commit-config.yaml"));
    }
}
