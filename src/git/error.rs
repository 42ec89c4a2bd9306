//! Typed failures for git command execution

use thiserror::Error;

/// Errors surfaced by [`CommandRunner`](crate::git::CommandRunner)
/// implementations.
///
/// The parsing layer itself never fails; everything here originates below
/// it, in the subprocess boundary.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be spawned at all.
    #[error("failed to execute git {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited non-zero; stderr is captured verbatim.
    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// git produced stdout that was not valid UTF-8.
    #[error("git {command} produced output that was not valid UTF-8")]
    InvalidUtf8 { command: String },
}
