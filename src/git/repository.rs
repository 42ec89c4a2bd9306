//! Branch listings and upstream-tracking status
//!
//! Everything here is a one-command query: run a listing variant, then do a
//! pure text transformation on its output. Nothing is cached between calls;
//! each result reflects the tool's output at call time.

use std::collections::HashMap;

use regex::Regex;

use crate::git::{Branch, CommandRunner, GitError};

/// Branch queries and thin write operations over one repository.
///
/// Owns the [`CommandRunner`] it was constructed with, so tests can inject
/// a fake runner with canned listing output.
#[derive(Debug)]
pub struct BranchRepository<R> {
    runner: R,
}

impl<R: CommandRunner> BranchRepository<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// All local branches, in the order `git branch` emits them.
    pub fn local(&self) -> Result<Vec<Branch>, GitError> {
        let output = self.runner.run(&["branch"])?;
        Ok(to_branches(&output))
    }

    /// Local branches already merged into the current branch.
    pub fn local_merged(&self) -> Result<Vec<Branch>, GitError> {
        let output = self.runner.run(&["branch", "--merged"])?;
        Ok(to_branches(&output))
    }

    /// Upstream-tracking status for every local branch that has one.
    ///
    /// Maps proper branch name to a label: `"Up to date"`, `"Ahead N"`,
    /// `"Behind N"` or `"Ahead N, behind M"`. Branches with no upstream
    /// configured are absent from the map, not given a default label.
    pub fn upstream_info(&self) -> Result<HashMap<String, String>, GitError> {
        let output = self.runner.run(&["branch", "-vv"])?;
        Ok(parse_upstream_info(&output))
    }

    /// Force-delete the given branches in a single invocation.
    pub fn delete_multi(&self, names: &[&str]) -> Result<(), GitError> {
        if names.is_empty() {
            return Ok(());
        }
        let mut args = vec!["branch", "-D"];
        args.extend_from_slice(names);
        self.runner.run(&args).map(|_| ())
    }

    /// Rename a branch.
    pub fn rename(&self, from: &str, to: &str) -> Result<(), GitError> {
        self.runner.run(&["branch", "-m", from, to]).map(|_| ())
    }

    /// Check out a branch.
    pub fn checkout(&self, name: &str) -> Result<(), GitError> {
        self.runner.run(&["checkout", name]).map(|_| ())
    }
}

/// Split listing output into one [`Branch`] per non-empty line.
///
/// Lines keep their `"* "` marker but lose surrounding whitespace; blank
/// lines from trailing separators are dropped.
fn to_branches(output: &str) -> Vec<Branch> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Branch::new)
        .collect()
}

/// Parse `git branch -vv` output into the name → status-label map.
///
/// Line shape: `[* ]<name>  <sha>  [<annotation>] <subject...>`. Lines with
/// no annotation after the SHA have no upstream and produce no entry. When
/// a branch is both ahead and behind, ahead is stated first whatever order
/// the tool printed them in.
fn parse_upstream_info(output: &str) -> HashMap<String, String> {
    let ahead_re = Regex::new(r"ahead (\d+)").expect("Invalid regex pattern");
    let behind_re = Regex::new(r"behind (\d+)").expect("Invalid regex pattern");

    let mut info = HashMap::new();
    for line in output.lines() {
        let branch = Branch::new(line);
        let Some(name) = branch.proper_name().split_whitespace().next() else {
            continue;
        };
        let Some(annotation) = tracking_annotation(branch.proper_name()) else {
            continue;
        };

        let label = match (
            first_capture(&ahead_re, annotation),
            first_capture(&behind_re, annotation),
        ) {
            (None, None) => "Up to date".to_string(),
            (Some(ahead), None) => format!("Ahead {ahead}"),
            (None, Some(behind)) => format!("Behind {behind}"),
            (Some(ahead), Some(behind)) => format!("Ahead {ahead}, behind {behind}"),
        };
        info.insert(name.to_string(), label);
    }
    info
}

/// Extract the tracking-annotation body from one `-vv` line, already
/// stripped of marker and leading whitespace.
///
/// The annotation is the bracketed field directly after the SHA; bracketed
/// text later in the commit subject does not count.
fn tracking_annotation(line: &str) -> Option<&str> {
    let mut rest = line;
    // Skip the <name> and <sha> fields.
    for _ in 0..2 {
        let end = rest.find(char::is_whitespace)?;
        rest = rest[end..].trim_start();
    }
    let body = rest.strip_prefix('[')?;
    let end = body.find(']')?;
    Some(&body[..end])
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
