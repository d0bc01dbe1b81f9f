//! End-to-end tests against a real git repository
//!
//! These tests drive the system `git` binary and return early when it is
//! not installed.

use anyhow::Result;
use batcher_core::{CommandResult, Layout, Settings, WorkItem};
use batcher_engine::{inspect_repository, CommandRunner, GitCli, Orchestrator};
use batcher_journal::Journal;
use log::Level;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(repo: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Repository with one empty commit and `packages/{a,b,c}`, where only
/// `a` and `b` contain files
fn make_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["config", "user.name", "test-user"]);
    git(dir.path(), &["config", "user.email", "test@example.com"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    git(dir.path(), &["commit", "-q", "--allow-empty", "-m", "initial"]);

    let packages = dir.path().join("packages");
    fs::create_dir_all(packages.join("a")).unwrap();
    fs::create_dir_all(packages.join("b").join("src")).unwrap();
    fs::create_dir_all(packages.join("c")).unwrap();
    fs::write(packages.join("a").join("README"), "a\n").unwrap();
    fs::write(packages.join("b").join("src").join("main.txt"), "b\n").unwrap();
    dir
}

/// Wraps the real client and records subcommands
struct Recording {
    inner: GitCli,
    subcommands: RefCell<Vec<String>>,
}

impl CommandRunner for Recording {
    fn execute(&self, args: &[String], cwd: &Path) -> batcher_engine::Result<CommandResult> {
        self.subcommands.borrow_mut().push(args[0].clone());
        self.inner.execute(args, cwd)
    }
}

#[test]
fn test_commits_each_package_separately() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let repo = make_repo();
    let settings = Settings::default();
    let runner = GitCli::default();
    let mut journal = Journal::in_memory();

    let stats = Orchestrator::new(&runner, &settings, Layout::Packages, repo.path())
        .run(&mut journal)?;

    // `c` is empty, so git does not see it at all
    assert_eq!(stats.committed, 2);
    assert_eq!(stats.skipped, 1);

    let log = git(repo.path(), &["log", "--format=%s"]);
    let subjects: Vec<&str> = log.lines().collect();
    assert_eq!(subjects, vec!["packages -> b", "packages -> a", "initial"]);

    // No remote: the flush push fails without stopping the run
    assert_eq!(stats.pushes_failed, 1);
    assert!(journal.contains(Level::Warn, "No remote configured"));
    Ok(())
}

#[test]
fn test_second_run_issues_no_mutating_commands() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let repo = make_repo();
    let settings = Settings::default();

    let mut journal = Journal::in_memory();
    Orchestrator::new(&GitCli::default(), &settings, Layout::Packages, repo.path())
        .run(&mut journal)?;

    let runner = Recording {
        inner: GitCli::default(),
        subcommands: RefCell::new(Vec::new()),
    };
    let mut journal = Journal::in_memory();
    let stats = Orchestrator::new(&runner, &settings, Layout::Packages, repo.path())
        .run(&mut journal)?;

    assert_eq!(stats.committed, 0);
    assert!(runner.subcommands.borrow().iter().all(|s| s == "status"));
    Ok(())
}

#[test]
fn test_commit_leaves_other_packages_unstaged() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let repo = make_repo();
    let settings = Settings::default();
    let runner = GitCli::default();
    let mut journal = Journal::in_memory();

    // Stage `b` by hand; committing `a` must not sweep it into a's commit
    git(repo.path(), &["add", "packages/b"]);
    let item = WorkItem::new(Layout::Packages, repo.path(), "a");
    Orchestrator::new(&runner, &settings, Layout::Packages, repo.path())
        .process_item(&item, &mut journal)?;

    let files = git(repo.path(), &["show", "--name-only", "--format=", "HEAD"]);
    assert_eq!(files, "packages/a/README");
    Ok(())
}

#[test]
fn test_inspect_repository_reports_branch_and_remotes() -> Result<()> {
    if !git_available() {
        return Ok(());
    }
    let repo = make_repo();
    git(repo.path(), &["remote", "add", "origin", "https://example.invalid/repo.git"]);
    let branch = git(repo.path(), &["rev-parse", "--abbrev-ref", "HEAD"]);

    let info = inspect_repository(repo.path()).unwrap();
    assert_eq!(info.branch.as_deref(), Some(branch.as_str()));
    assert_eq!(info.remotes, vec!["origin".to_string()]);
    Ok(())
}

