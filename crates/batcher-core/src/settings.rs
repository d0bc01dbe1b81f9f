//! Run settings and their source-level defaults

use serde::Deserialize;
use std::path::Path;

use crate::error::CoreError;

/// Remove a work item's directory after a fatal failure (destructive)
pub const DELETE_ON_FATAL: bool = false;

/// Successful commits accumulated before an automatic push
pub const PUSH_BATCH_SIZE: usize = 5;

/// Version-control client executable
pub const GIT_PROGRAM: &str = "git";

/// Subdirectory scanned in the packages layout
pub const PACKAGES_DIR: &str = "packages";

/// Log file name, created beside the executable
pub const LOG_FILE_NAME: &str = "log.txt";

/// Settings for one run
///
/// Every field falls back to its constant default, so a settings file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub delete_on_fatal: bool,
    pub push_batch_size: usize,
    pub git_program: String,

    /// Arguments of the push command; never scoped to an item
    pub push_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delete_on_fatal: DELETE_ON_FATAL,
            push_batch_size: PUSH_BATCH_SIZE,
            git_program: GIT_PROGRAM.to_string(),
            push_args: vec!["push".to_string()],
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file and validates them
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&raw).map_err(|source| CoreError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.push_batch_size == 0 {
            return Err(CoreError::InvalidSettings(
                "push_batch_size must be at least 1".to_string(),
            ));
        }
        if self.git_program.trim().is_empty() {
            return Err(CoreError::InvalidSettings(
                "git_program must not be empty".to_string(),
            ));
        }
        if self.push_args.is_empty() {
            return Err(CoreError::InvalidSettings(
                "push_args must contain at least the push subcommand".to_string(),
            ));
        }
        Ok(())
    }
}
