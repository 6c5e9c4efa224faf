// Rust guideline compliant 2026-02-06

//! Error types for the prehook core library.

use thiserror::Error;

/// Result type alias for prehook core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for manifest, selection and configuration operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax or shape error in a manifest document.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Manifest parsed but violates a structural rule.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// A regular expression in the manifest does not compile.
    #[error("Invalid pattern for '{field}': {pattern:?} ({message})")]
    InvalidPattern {
        /// Dotted location of the pattern, e.g. `repos[1].hooks[0].files`.
        field: String,
        /// The offending pattern text.
        pattern: String,
        /// Compiler message from the regex engine.
        message: String,
    },

    /// Unknown file type tag in `types`, `types_or` or `exclude_types`.
    #[error("Unknown file type tag '{tag}' in {field}")]
    UnknownTypeTag {
        /// Dotted location of the tag list.
        field: String,
        /// The unrecognised tag.
        tag: String,
    },

    /// Invalid runner configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
