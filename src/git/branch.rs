//! Branch entity derived from branch-listing output
//!
//! A [`Branch`] wraps a single line of `git branch` output without
//! validating it against a repository. Name and current-branch facts are
//! derived on demand rather than stored; per-branch commit facts are
//! fetched through a [`CommandRunner`] when asked for.

use serde::Serialize;

use crate::git::{CommandRunner, GitError};

/// Marker `git branch` prints in front of the checked-out branch.
const CURRENT_MARKER: &str = "* ";

/// One line of branch-listing output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Branch {
    raw_name: String,
}

impl Branch {
    pub fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
        }
    }

    /// The line exactly as it was handed to the constructor.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Bare branch name: leading whitespace stripped, then one leading
    /// `"* "` stripped. A marker anywhere else in the name is kept.
    pub fn proper_name(&self) -> &str {
        let name = self.raw_name.trim_start();
        name.strip_prefix(CURRENT_MARKER).unwrap_or(name)
    }

    /// Whether this line marks the checked-out branch.
    ///
    /// The listing tool always puts the marker in column one, so leading
    /// whitespace before it means "not current".
    pub fn is_current(&self) -> bool {
        self.raw_name.starts_with(CURRENT_MARKER)
    }

    /// Name for display lists.
    ///
    /// The current branch is returned unaltered; its marker already spans
    /// two columns. With `pad`, non-current branches are prefixed with two
    /// spaces so the names line up underneath it.
    pub fn displayable_name(&self, pad: bool) -> String {
        if pad && !self.is_current() {
            format!("  {}", self.raw_name)
        } else {
            self.raw_name.clone()
        }
    }

    /// Author of the most recent commit on this branch.
    pub fn last_author(&self, runner: &impl CommandRunner) -> Result<String, GitError> {
        runner.run(&["log", "-n1", "--format=format:%an", self.proper_name()])
    }

    /// Date of the most recent commit on this branch, in short format.
    pub fn last_commit_date(&self, runner: &impl CommandRunner) -> Result<String, GitError> {
        runner.run(&[
            "log",
            "-n1",
            "--date=short",
            "--format=format:%cd",
            self.proper_name(),
        ])
    }

    /// Subject line of the most recent commit on this branch.
    pub fn last_commit_subject(&self, runner: &impl CommandRunner) -> Result<String, GitError> {
        runner.run(&["log", "-n1", "--format=format:%s", self.proper_name()])
    }
}
