//! Per-item commit orchestration
//!
//! Each work item moves through probe → stage → commit on its own. A
//! failure ends that item only; the run always continues with the next one.
//! All commands run sequentially because every item shares one index.

use batcher_core::{
    classify, Classification, CommandResult, ItemOutcome, ItemState, Layout, Settings, SkipReason,
    WorkItem,
};
use batcher_journal::Journal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::batcher::PushBatcher;
use crate::enumerate::enumerate_work_items;
use crate::error::Result;
use crate::probe::{probe_changes, ProbeOutcome};
use crate::repo::preflight;
use crate::runner::CommandRunner;
use crate::stats::RunStats;

/// Client step that failed, used in journal tags
#[derive(Debug, Clone, Copy)]
enum Step {
    Add,
    Commit,
}

impl Step {
    fn tag(self) -> &'static str {
        match self {
            Step::Add => "add",
            Step::Commit => "commit",
        }
    }
}

/// Drives a batch run over one repository
pub struct Orchestrator<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    settings: &'a Settings,
    layout: Layout,
    repo_root: PathBuf,
    batcher: PushBatcher,
}

impl<'a, R: CommandRunner + ?Sized> Orchestrator<'a, R> {
    pub fn new(runner: &'a R, settings: &'a Settings, layout: Layout, repo_root: &Path) -> Self {
        Self {
            runner,
            settings,
            layout,
            repo_root: repo_root.to_path_buf(),
            batcher: PushBatcher::new(settings.push_batch_size),
        }
    }

    pub fn batcher(&self) -> &PushBatcher {
        &self.batcher
    }

    /// Enumerates the work items of the repository and processes them all
    ///
    /// Fails only on run-fatal errors: an invalid root, a missing scan
    /// directory or a client that cannot be started.
    pub fn run(&mut self, journal: &mut Journal) -> Result<RunStats> {
        let items = enumerate_work_items(self.layout, &self.repo_root)?;

        let scan_dir = match self.layout.scan_subdir() {
            Some(sub) => self.repo_root.join(sub),
            None => self.repo_root.clone(),
        };
        journal.info(format!(
            "Found {} directories (without .git) in {:?}",
            items.len(),
            scan_dir
        ));
        preflight(&self.repo_root, journal);
        journal.info(format!(
            "Pushing every {} commit(s)",
            self.batcher.threshold()
        ));

        self.process_items(&items, journal)
    }

    /// Processes the given items in order, then flushes unpushed commits
    pub fn process_items(&mut self, items: &[WorkItem], journal: &mut Journal) -> Result<RunStats> {
        let start_time = Instant::now();
        let mut stats = RunStats::default();

        for item in items {
            let outcome = self.process_item(item, journal)?;
            stats.record(outcome);
        }

        self.batcher
            .flush(self.runner, &self.repo_root, &self.settings.push_args, journal)?;

        stats.pushes_succeeded = self.batcher.succeeded();
        stats.pushes_failed = self.batcher.failed();
        stats.elapsed_time = start_time.elapsed();

        journal.info(format!("Push attempts: {}", self.batcher.attempts()));

        journal.info(format!("Done. {}", stats));
        Ok(stats)
    }

    /// Runs one item through probe, stage and commit
    pub fn process_item(&mut self, item: &WorkItem, journal: &mut Journal) -> Result<ItemOutcome> {
        journal.info(format!("▶ Processing {}", item.name));

        match probe_changes(self.runner, &self.repo_root, item, journal)? {
            ProbeOutcome::Changed => {}
            ProbeOutcome::Clean => {
                journal.info(format!("[SKIP] '{}' has no changes, skipping.", item.name));
                return Ok(ItemOutcome::new(&item.name, ItemState::Skipped(SkipReason::Clean)));
            }
            ProbeOutcome::Failed => {
                return Ok(ItemOutcome::new(&item.name, ItemState::Skipped(SkipReason::ProbeFailed)));
            }
        }

        let add = self.execute(vec!["add".into(), "--".into(), item.pathspec()])?;
        match classify(&add) {
            Classification::Success => {}
            Classification::Fatal => {
                return Ok(self.fatal_failure(item, Step::Add, &add, ItemState::StageFailed, journal));
            }
            Classification::NothingToCommit | Classification::RecoverableWarning => {
                journal.warn(format!(
                    "[add] non-zero exit for {}: {}",
                    item.name,
                    add.combined_output()
                ));
                return Ok(ItemOutcome::new(&item.name, ItemState::StageFailed));
            }
        }

        let commit = self.execute(vec![
            "commit".into(),
            "-m".into(),
            self.layout.commit_message(&item.name),
            "--".into(),
            item.pathspec(),
        ])?;
        match classify(&commit) {
            Classification::Success => {}
            Classification::Fatal => {
                return Ok(self.fatal_failure(item, Step::Commit, &commit, ItemState::CommitFailed, journal));
            }
            Classification::NothingToCommit => {
                journal.info(format!("[commit] Nothing to commit for {} after add.", item.name));
                return Ok(ItemOutcome::new(&item.name, ItemState::CommitNoop));
            }
            Classification::RecoverableWarning => {
                journal.warn(format!(
                    "[commit] non-zero exit for {}: {}",
                    item.name,
                    commit.combined_output()
                ));
                return Ok(ItemOutcome::new(&item.name, ItemState::CommitFailed));
            }
        }

        let pending = self.batcher.record_commit();
        journal.info(format!(
            "[OK][commit] Committed {} (batch count: {})",
            item.name, pending
        ));
        self.batcher
            .push_if_due(self.runner, &self.repo_root, &self.settings.push_args, journal)?;

        Ok(ItemOutcome::new(&item.name, ItemState::CommitSucceeded))
    }

    fn execute(&self, args: Vec<String>) -> Result<CommandResult> {
        self.runner.execute(&args, &self.repo_root)
    }

    /// Records a fatal step failure and applies the delete-on-fatal policy
    fn fatal_failure(
        &self,
        item: &WorkItem,
        step: Step,
        result: &CommandResult,
        state: ItemState,
        journal: &mut Journal,
    ) -> ItemOutcome {
        journal.error(format!(
            "[FATAL][{}] {}: {}",
            step.tag(),
            item.name,
            result.combined_output()
        ));

        let mut outcome = ItemOutcome::new(&item.name, state);
        outcome.fatal = true;

        if self.settings.delete_on_fatal {
            match std::fs::remove_dir_all(&item.abs_path) {
                Ok(()) => {
                    journal.error(format!("Removed {:?} after fatal failure", item.abs_path));
                    outcome.removed = true;
                }
                Err(e) => {
                    journal.error(format!("Failed to remove {:?}: {}", item.abs_path, e));
                }
            }
        }

        outcome
    }
}
