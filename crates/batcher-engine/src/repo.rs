//! Repository preflight
//!
//! The batch run assumes a repository that already exists and has a remote.
//! The preflight only reports what it finds; it never stops a run, since a
//! broken repository surfaces per item as fatal client output anyway.

use batcher_journal::Journal;
use git2::Repository;
use std::path::{Path, PathBuf};

/// What the preflight learned about the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Working tree root
    pub workdir: Option<PathBuf>,

    /// Current branch; also resolved on an unborn branch
    pub branch: Option<String>,

    /// Configured remote names
    pub remotes: Vec<String>,
}

/// Inspects the repository containing `root`, if any
pub fn inspect_repository(root: &Path) -> Option<RepoInfo> {
    let repo = Repository::discover(root).ok()?;

    let branch = match repo.head() {
        Ok(head) => head.shorthand().map(str::to_string),
        // Unborn branch: HEAD still names its target symbolically
        Err(_) => repo
            .find_reference("HEAD")
            .ok()
            .and_then(|r| r.symbolic_target().map(str::to_string))
            .map(|target| target.trim_start_matches("refs/heads/").to_string()),
    };

    let remotes = repo
        .remotes()
        .map(|names| names.iter().flatten().map(str::to_string).collect())
        .unwrap_or_default();

    Some(RepoInfo {
        workdir: repo.workdir().map(Path::to_path_buf),
        branch,
        remotes,
    })
}

/// Records the repository state in the journal before processing
pub fn preflight(root: &Path, journal: &mut Journal) -> Option<RepoInfo> {
    let Some(info) = inspect_repository(root) else {
        journal.warn(format!(
            "{:?} is not inside a git repository; every item is expected to fail",
            root
        ));
        return None;
    };

    journal.info(format!(
        "Repository {:?} on branch {}",
        info.workdir.as_deref().unwrap_or(root),
        info.branch.as_deref().unwrap_or("(detached)")
    ));

    if info.remotes.is_empty() {
        journal.warn("No remote configured; pushes will fail and commits stay local");
    } else {
        log::debug!("Remotes: {}", info.remotes.join(", "));
    }

    Some(info)
}
