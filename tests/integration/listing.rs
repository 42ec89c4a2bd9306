//! Listing queries, per-branch log queries, and delegation writes

use git_tend::git::{Branch, BranchRepository, GitError, GitRunner};
use regex::Regex;

use super::helpers::*;

#[test]
fn test_local_lists_branches_in_tool_order() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();
    git(&["branch", "alpha"], repo_root);
    git(&["branch", "zeta"], repo_root);

    let repo = BranchRepository::new(GitRunner::new(repo_root));
    let branches = repo.local().expect("Failed to list branches");

    let raw: Vec<&str> = branches.iter().map(Branch::raw_name).collect();
    assert_eq!(raw, vec!["alpha", "* main", "zeta"]);

    let proper: Vec<&str> = branches.iter().map(Branch::proper_name).collect();
    assert_eq!(proper, vec!["alpha", "main", "zeta"]);

    let current: Vec<bool> = branches.iter().map(Branch::is_current).collect();
    assert_eq!(current, vec![false, true, false]);
}

#[test]
fn test_local_merged_reports_only_merged_branches() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();
    git(&["branch", "merged-work"], repo_root);
    git(&["checkout", "-b", "unmerged-work"], repo_root);
    commit_file("extra.txt", "extra", repo_root);
    git(&["checkout", "main"], repo_root);

    let repo = BranchRepository::new(GitRunner::new(repo_root));
    let merged = repo.local_merged().expect("Failed to list merged branches");

    let proper: Vec<&str> = merged.iter().map(Branch::proper_name).collect();
    assert!(proper.contains(&"main"));
    assert!(proper.contains(&"merged-work"));
    assert!(!proper.contains(&"unmerged-work"));
}

#[test]
fn test_log_queries_read_the_branch_tip() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();
    git(&["checkout", "-b", "feature/thing"], repo_root);
    commit_file("feature.txt", "feature", repo_root);
    git(&["checkout", "main"], repo_root);

    let runner = GitRunner::new(repo_root);
    let branch = Branch::new("feature/thing");

    assert_eq!(branch.last_author(&runner).unwrap(), "Test User");
    assert_eq!(
        branch.last_commit_subject(&runner).unwrap(),
        "Add feature.txt"
    );

    let date = branch.last_commit_date(&runner).unwrap();
    let short_date = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();
    assert!(short_date.is_match(&date), "unexpected date: {date:?}");
}

#[test]
fn test_delegation_writes_roundtrip() {
    let temp_dir = init_test_repo();
    let repo_root = temp_dir.path();
    git(&["branch", "doomed-1"], repo_root);
    git(&["branch", "doomed-2"], repo_root);
    git(&["branch", "old-name"], repo_root);

    let repo = BranchRepository::new(GitRunner::new(repo_root));

    repo.delete_multi(&["doomed-1", "doomed-2"])
        .expect("Failed to delete branches");
    repo.rename("old-name", "new-name")
        .expect("Failed to rename branch");
    repo.checkout("new-name").expect("Failed to checkout branch");

    let branches = repo.local().expect("Failed to list branches");
    let raw: Vec<&str> = branches.iter().map(Branch::raw_name).collect();
    assert_eq!(raw, vec!["main", "* new-name"]);
}

#[test]
fn test_failed_commands_surface_stderr() {
    let temp_dir = init_test_repo();
    let repo = BranchRepository::new(GitRunner::new(temp_dir.path()));

    let err = repo.checkout("does-not-exist").unwrap_err();
    match err {
        GitError::CommandFailed { stderr, .. } => {
            assert!(stderr.contains("does-not-exist"), "stderr: {stderr:?}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
