//! Change detection for a single work item

use batcher_core::WorkItem;
use batcher_journal::Journal;
use std::path::Path;

use crate::error::Result;
use crate::runner::CommandRunner;

/// Result of probing a work item for uncommitted changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Untracked, modified or staged-but-uncommitted changes exist
    Changed,

    /// Working tree and index match the last commit
    Clean,

    /// The status query exited non-zero; the item must not be committed
    Failed,
}

/// Runs `status --porcelain -- <rel>` from the repository root
///
/// Only stdout decides: a successful status may still print warnings on
/// stderr (e.g. line-ending conversions) without any change being present.
pub fn probe_changes<R: CommandRunner + ?Sized>(
    runner: &R,
    repo_root: &Path,
    item: &WorkItem,
    journal: &mut Journal,
) -> Result<ProbeOutcome> {
    let args = vec![
        "status".to_string(),
        "--porcelain".to_string(),
        "--".to_string(),
        item.rel_path.clone(),
    ];
    let result = runner.execute(&args, repo_root)?;

    if !result.success() {
        journal.warn(format!(
            "[status] exit code {} for {}, skipping: {}",
            result.exit_code,
            item.rel_path,
            result.combined_output()
        ));
        return Ok(ProbeOutcome::Failed);
    }

    if result.stdout.trim().is_empty() {
        Ok(ProbeOutcome::Clean)
    } else {
        Ok(ProbeOutcome::Changed)
    }
}
