//! Batcher Core - Shared data models and outcome classification
//!
//! This crate defines the core data structures used throughout the project,
//! including `WorkItem`, `CommandResult` and the pure `classify` function
//! that turns raw client output into a `Classification`.

mod classify;
mod error;
mod models;
mod settings;

pub use classify::classify;
pub use error::CoreError;
pub use models::{
    Classification, CommandResult, ItemOutcome, ItemState, Layout, SkipReason, WorkItem,
};
pub use settings::{
    Settings, DELETE_ON_FATAL, GIT_PROGRAM, LOG_FILE_NAME, PACKAGES_DIR, PUSH_BATCH_SIZE,
};
