//! Shared batch run for both layouts

use anyhow::{Context, Result};
use batcher_core::{Layout, Settings};
use batcher_engine::{GitCli, Orchestrator};
use batcher_journal::Journal;
use std::path::Path;

use crate::output::print_summary;

/// Runs the orchestrator and reports the outcome
///
/// Only run-fatal errors fail the command; item failures are in the log.
pub(super) fn run_batch(layout: Layout, root: &Path, settings: &Settings, journal: &mut Journal) -> Result<()> {
    log::debug!("Settings: {:?}", settings);
    if let Some(path) = journal.path() {
        log::info!("Logging to {:?}", path);
    }

    let runner = GitCli::new(settings.git_program.clone());
    log::debug!("Using client '{}'", runner.program());
    let result = Orchestrator::new(&runner, settings, layout, root).run(journal);

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            journal.error(e.to_string());
            journal.flush()?;
            return Err(e).context("Batch run aborted");
        }
    };

    journal.flush()?;
    print_summary(&stats, journal);
    Ok(())
}
