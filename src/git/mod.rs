//! Branch model and git-backed queries for branch curation
//!
//! This module provides:
//! - `runner`: command execution abstraction over the system git binary
//! - `branch`: the Branch entity derived from one line of listing output
//! - `repository`: listing queries, upstream-tracking status, and thin
//!   branch write operations
//! - `error`: typed failures surfaced by command execution

pub mod branch;
pub mod error;
pub mod repository;
pub mod runner;

pub use branch::Branch;
pub use error::GitError;
pub use repository::BranchRepository;
pub use runner::{check_git_available, CommandRunner, GitRunner};
