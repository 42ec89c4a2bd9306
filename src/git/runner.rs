//! Git command runner abstraction
//!
//! Centralizes subprocess execution behind a small trait so the parsing
//! layer never touches `std::process` directly and tests can substitute a
//! fake runner with canned output.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::git::GitError;

/// Executes one fully-formed git invocation and returns its captured stdout.
///
/// `args` is the argv tail after `git`, e.g. `&["branch", "-vv"]`. Stdout
/// comes back verbatim, trailing newlines included; callers that need
/// trimmed output trim at the call site. A non-zero exit is an error
/// carrying the captured stderr.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> Result<String, GitError>;
}

/// [`CommandRunner`] backed by the system `git` binary, pinned to one
/// repository's working directory.
#[derive(Debug, Clone)]
pub struct GitRunner {
    repo_root: PathBuf,
}

impl GitRunner {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

impl CommandRunner for GitRunner {
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!(command = %args.join(" "), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|source| GitError::Spawn {
                command: args.join(" "),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8 {
            command: args.join(" "),
        })
    }
}

/// Check that git is installed and runnable.
pub fn check_git_available() -> Result<(), GitError> {
    GitRunner::new(".").run(&["--version"]).map(|_| ())
}
