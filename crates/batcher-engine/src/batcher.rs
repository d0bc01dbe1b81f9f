//! Push batching
//!
//! Commits accumulate locally and are pushed in batches once the rolling
//! counter reaches the threshold. The counter resets after every push
//! attempt, successful or not, so a failing remote never blocks further
//! commits; those commits simply stay local until a later push succeeds.

use batcher_core::{classify, Classification};
use batcher_journal::Journal;
use std::path::Path;

use crate::error::Result;
use crate::runner::CommandRunner;

/// What caused a push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushTrigger {
    /// The rolling counter reached the threshold
    Threshold,

    /// End of run with commits left unpushed
    Flush,
}

/// Rolling counter of unpushed commits plus push bookkeeping
#[derive(Debug, Clone)]
pub struct PushBatcher {
    threshold: usize,
    pending: usize,
    succeeded: usize,
    failed: usize,
}

impl PushBatcher {
    /// Creates a batcher; a threshold of 0 is treated as 1
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold.max(1),
            pending: 0,
            succeeded: 0,
            failed: 0,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Commits made since the last push attempt
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Counts one successful commit and returns the new counter value
    pub fn record_commit(&mut self) -> usize {
        self.pending += 1;
        self.pending
    }

    pub fn is_due(&self) -> bool {
        self.pending >= self.threshold
    }

    pub fn attempts(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Pushes if the threshold has been reached
    pub fn push_if_due<R: CommandRunner + ?Sized>(
        &mut self,
        runner: &R,
        repo_root: &Path,
        push_args: &[String],
        journal: &mut Journal,
    ) -> Result<Option<Classification>> {
        if !self.is_due() {
            return Ok(None);
        }
        self.push(runner, repo_root, push_args, PushTrigger::Threshold, journal)
            .map(Some)
    }

    /// Pushes whatever is left at the end of a run
    pub fn flush<R: CommandRunner + ?Sized>(
        &mut self,
        runner: &R,
        repo_root: &Path,
        push_args: &[String],
        journal: &mut Journal,
    ) -> Result<Option<Classification>> {
        if self.pending == 0 {
            return Ok(None);
        }
        journal.info(format!("Pushing remainder: {} commit(s).", self.pending));
        self.push(runner, repo_root, push_args, PushTrigger::Flush, journal)
            .map(Some)
    }

    /// Runs the push command and records its outcome
    ///
    /// Push failures are never run-fatal; only failing to start the client
    /// is returned as an error.
    pub fn push<R: CommandRunner + ?Sized>(
        &mut self,
        runner: &R,
        repo_root: &Path,
        push_args: &[String],
        trigger: PushTrigger,
        journal: &mut Journal,
    ) -> Result<Classification> {
        let count = std::mem::take(&mut self.pending);
        let when = match trigger {
            PushTrigger::Threshold => format!("after {} commit(s)", count),
            PushTrigger::Flush => "on final push".to_string(),
        };

        let result = runner.execute(push_args, repo_root)?;
        let classification = classify(&result);

        match classification {
            Classification::Success => {
                self.succeeded += 1;
                journal.info(format!("[OK][push] Pushed {} commit(s) {}.", count, when));
            }
            Classification::Fatal => {
                self.failed += 1;
                journal.error(format!("[FATAL][push] {}: {}", when, result.combined_output()));
            }
            Classification::NothingToCommit | Classification::RecoverableWarning => {
                self.failed += 1;
                journal.warn(format!("[push] non-zero exit {}: {}", when, result.combined_output()));
            }
        }

        Ok(classification)
    }
}
