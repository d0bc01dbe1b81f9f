//! Run-fatal errors of the engine

use std::path::PathBuf;

/// Errors that stop a whole run
///
/// Per-item failures are never errors; they are classified, recorded in
/// the journal and turned into an `ItemOutcome`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Path not found or not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Directory to scan not found: {0:?}")]
    MissingScanDir(PathBuf),

    #[error("Version-control client '{0}' not found in PATH")]
    ClientNotFound(String),

    #[error("Failed to run '{program}' in {cwd:?}: {source}")]
    Spawn {
        program: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
