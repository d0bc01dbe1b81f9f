//! Batcher Engine - Per-directory commit and batched push
//!
//! This crate is responsible for:
//! - Enumerating the subdirectories that form work items
//! - Probing each item for uncommitted changes
//! - Staging and committing every item on its own, classifying failures
//! - Pushing accumulated commits in batches and flushing the remainder

mod batcher;
mod enumerate;
mod error;
mod orchestrator;
mod probe;
mod repo;
mod runner;
mod stats;

pub use batcher::{PushBatcher, PushTrigger};
pub use enumerate::{enumerate_work_items, list_subdirectories};
pub use error::{EngineError, Result};
pub use orchestrator::Orchestrator;
pub use probe::{probe_changes, ProbeOutcome};
pub use repo::{inspect_repository, preflight, RepoInfo};
pub use runner::{CommandRunner, GitCli};
pub use stats::RunStats;
