//! Packages command implementation

use anyhow::Result;
use batcher_core::{Layout, Settings};
use batcher_journal::Journal;
use std::path::PathBuf;

use super::run::run_batch;
use crate::helpers::resolve_path;

/// Commits each subdirectory of `<repo>/packages` and pushes in batches
pub fn cmd_packages(repo: Option<PathBuf>, settings: &Settings, journal: &mut Journal) -> Result<()> {
    let repo = resolve_path(repo, "Path to the repository: ")?;
    run_batch(Layout::Packages, &repo, settings, journal)
}
