//! Tree command implementation

use anyhow::Result;
use batcher_core::{Layout, Settings};
use batcher_journal::Journal;
use std::path::PathBuf;

use super::run::run_batch;
use crate::helpers::resolve_path;

/// Commits each immediate subdirectory of the root under its own name
pub fn cmd_tree(root: Option<PathBuf>, settings: &Settings, journal: &mut Journal) -> Result<()> {
    let root = resolve_path(root, "Path to the directory holding the folders: ")?;
    run_batch(Layout::Tree, &root, settings, journal)
}
