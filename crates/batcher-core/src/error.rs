//! Error types for batcher-core

use std::path::PathBuf;

/// Errors specific to batcher-core
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Failed to read settings file {path:?}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path:?}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
