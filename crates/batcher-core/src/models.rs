//! Core data models for the batcher

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory layout a run operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Subdirectories of `<repo>/packages`, committed as `packages -> <name>`
    Packages,

    /// Immediate subdirectories of the repository root, committed as `<name>`
    Tree,
}

impl Layout {
    /// Directory (relative to the repository root) whose children are work items
    pub fn scan_subdir(&self) -> Option<&'static str> {
        match self {
            Layout::Packages => Some(crate::PACKAGES_DIR),
            Layout::Tree => None,
        }
    }

    /// Commit message used for a work item
    pub fn commit_message(&self, name: &str) -> String {
        match self {
            Layout::Packages => format!("{} -> {}", crate::PACKAGES_DIR, name),
            Layout::Tree => name.to_string(),
        }
    }
}

/// One subdirectory processed as an independent unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Directory name (e.g., "alpha")
    pub name: String,

    /// Path relative to the repository root, always `/`-separated
    pub rel_path: String,

    /// Absolute path on disk
    pub abs_path: PathBuf,
}

impl WorkItem {
    /// Creates a work item for `name` under the given repository root
    pub fn new(layout: Layout, repo_root: &Path, name: &str) -> Self {
        let rel_path = match layout.scan_subdir() {
            Some(dir) => format!("{}/{}", dir, name),
            None => name.to_string(),
        };
        let abs_path = match layout.scan_subdir() {
            Some(dir) => repo_root.join(dir).join(name),
            None => repo_root.join(name),
        };

        Self {
            name: name.to_string(),
            rel_path,
            abs_path,
        }
    }

    /// Pathspec for `add`/`commit`, with a trailing slash so only the directory matches
    pub fn pathspec(&self) -> String {
        format!("{}/", self.rel_path)
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rel_path)
    }
}

/// Captured outcome of one client invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code; `-1` when terminated by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Stdout followed by stderr, trimmed
    pub fn combined_output(&self) -> String {
        let mut combined = String::with_capacity(self.stdout.len() + self.stderr.len() + 1);
        combined.push_str(self.stdout.trim_end());
        if !combined.is_empty() && !self.stderr.trim().is_empty() {
            combined.push('\n');
        }
        combined.push_str(self.stderr.trim_end());
        combined.trim().to_string()
    }
}

/// Classified outcome of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    Fatal,
    NothingToCommit,
    RecoverableWarning,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Success => "success",
            Classification::Fatal => "fatal",
            Classification::NothingToCommit => "nothing to commit",
            Classification::RecoverableWarning => "recoverable warning",
        };
        f.write_str(label)
    }
}

/// Why an item was skipped before staging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Status query reported no changes
    Clean,

    /// Status query itself exited non-zero
    ProbeFailed,
}

/// Terminal state of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Skipped(SkipReason),
    StageFailed,
    CommitNoop,
    CommitFailed,
    CommitSucceeded,
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemState::Skipped(SkipReason::Clean) => "skipped",
            ItemState::Skipped(SkipReason::ProbeFailed) => "probe failed",
            ItemState::StageFailed => "stage failed",
            ItemState::CommitNoop => "nothing to commit",
            ItemState::CommitFailed => "commit failed",
            ItemState::CommitSucceeded => "committed",
        };
        f.write_str(label)
    }
}

/// Result of processing one work item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub name: String,
    pub state: ItemState,

    /// Whether the failing step was classified as fatal
    pub fatal: bool,

    /// Whether the directory was removed after a fatal failure
    pub removed: bool,
}

impl ItemOutcome {
    pub fn new(name: &str, state: ItemState) -> Self {
        Self {
            name: name.to_string(),
            state,
            fatal: false,
            removed: false,
        }
    }
}
