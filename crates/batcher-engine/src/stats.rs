//! Run statistics

use batcher_core::{ItemOutcome, ItemState, SkipReason};
use std::time::Duration;


/// Counters for one run, built from item outcomes
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub items: usize,
    pub skipped: usize,
    pub probe_failed: usize,
    pub stage_failed: usize,
    pub commit_noop: usize,
    pub commit_failed: usize,
    pub committed: usize,
    pub fatal: usize,
    pub removed: usize,
    pub pushes_succeeded: usize,
    pub pushes_failed: usize,
    pub elapsed_time: Duration,

    /// Every item outcome, in processing order
    pub outcomes: Vec<ItemOutcome>,
}

impl RunStats {
    /// Counts one item outcome
    pub fn record(&mut self, outcome: ItemOutcome) {
        self.items += 1;
        match outcome.state {
            ItemState::Skipped(SkipReason::Clean) => self.skipped += 1,
            ItemState::Skipped(SkipReason::ProbeFailed) => self.probe_failed += 1,
            ItemState::StageFailed => self.stage_failed += 1,
            ItemState::CommitNoop => self.commit_noop += 1,
            ItemState::CommitFailed => self.commit_failed += 1,
            ItemState::CommitSucceeded => self.committed += 1,
        }
        if outcome.fatal {
            self.fatal += 1;
        }
        if outcome.removed {
            self.removed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Items that ended in a failure state
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| {
            matches!(
                o.state,
                ItemState::Skipped(SkipReason::ProbeFailed)
                    | ItemState::StageFailed
                    | ItemState::CommitFailed
            )
        })
    }
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Items: {} processed, {} committed, {} skipped, {} nothing to commit | Failures: {} probe, {} stage, {} commit ({} fatal, {} removed) | Pushes: {} ok, {} failed | Time: {}",
            self.items,
            self.committed,
            self.skipped,
            self.commit_noop,
            self.probe_failed,
            self.stage_failed,
            self.commit_failed,
            self.fatal,
            self.removed,
            self.pushes_succeeded,
            self.pushes_failed,
            format_elapsed(self.elapsed_time)
        )
    }
}

/// Wall-clock time of a run; sub-minute runs keep tenths of a second
fn format_elapsed(d: Duration) -> String {
    match d.as_secs() {
        0..=59 => format!("{:.1}s", d.as_secs_f64()),
        60..=3599 => format!("{}m {:02}s", d.as_secs() / 60, d.as_secs() % 60),
        secs => format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60),
    }
}
