// Rust guideline compliant 2026-02-06

//! Prehook Git Hooks
//!
//! This crate provides the entry points Git invokes:
//! - Pre-commit: runs hooks against the staged files
//! - Pre-push: runs hooks against the commits being pushed

pub mod pre_commit;
pub mod pre_push;
pub mod stage;

pub use pre_commit::pre_commit_hook;
pub use pre_push::{parse_push_refs, pre_push_hook, PushRef};
pub use stage::run_stage;
