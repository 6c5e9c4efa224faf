// Rust guideline compliant 2026-02-06

//! Error types for provider resolution and hook execution.

use prehook_core::Error as CoreError;
use thiserror::Error;

/// Result type alias for runner operations.
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Runner-level errors.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Error from manifest or selection operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// A provider checkout is missing or unusable.
    #[error("Provider {provider} unavailable: {reason}")]
    ProviderUnavailable {
        /// Provider reference (`location@rev`).
        provider: String,
        /// What went wrong.
        reason: String,
    },

    /// A provider does not define the referenced hook id.
    #[error("Hook '{id}' is not defined by {provider}")]
    UnknownHook {
        /// Provider reference (`location@rev`).
        provider: String,
        /// Referenced hook id.
        id: String,
    },

    /// A hook id requested for a run matches no manifest entry.
    #[error("No hook with id '{0}' in the manifest")]
    NoSuchHook(String),

    /// An entry command line cannot be parsed.
    #[error("Invalid entry for hook '{id}': {reason}")]
    InvalidEntry {
        /// Hook id.
        id: String,
        /// What is wrong with the entry.
        reason: String,
    },

    /// The provider store lock could not be taken.
    #[error("Provider store is locked: {0}")]
    Locked(String),

    /// Not inside a Git working tree.
    #[error("Not a git repository: {0}")]
    NotARepository(String),
}
