// Rust guideline compliant 2026-02-06

//! Prehook Runner
//!
//! This crate runs the hooks a manifest declares:
//! - Provider store (cached checkouts of hook providers)
//! - Resolution of manifest entries against provider definitions
//! - Changed-file discovery through Git
//! - Sequential hook execution and run reports

pub mod changes;
pub mod command;
pub mod error;
pub mod executor;
pub mod report;
pub mod resolve;
pub mod store;

pub use changes::{all_files, changed_between, discover_root, staged_files};
pub use error::{Result, RunnerError};
pub use executor::{skip_from_env, RunOptions, Runner, SKIP_ENV};
pub use report::{HookResult, Outcome, RunReport, DEFAULT_LINE_WIDTH};
pub use resolve::{resolve_all, Resolution, ResolvedHook};
pub use store::ProviderStore;
