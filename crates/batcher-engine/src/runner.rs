//! Execution of the version-control client

use batcher_core::CommandResult;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::error::{EngineError, Result};

/// Runs the version-control client
///
/// A non-zero exit is data, not an error: implementations return it inside
/// the `CommandResult`. Only failing to start the client is an error.
pub trait CommandRunner {
    fn execute(&self, args: &[String], cwd: &Path) -> Result<CommandResult>;
}

/// Runs the system `git` executable (or a configured replacement)
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(batcher_core::GIT_PROGRAM)
    }
}

impl CommandRunner for GitCli {
    fn execute(&self, args: &[String], cwd: &Path) -> Result<CommandResult> {
        log::debug!("Running {} {} in {:?}", self.program, args.join(" "), cwd);

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound if cwd.is_dir() => {
                    EngineError::ClientNotFound(self.program.clone())
                }
                _ => EngineError::Spawn {
                    program: self.program.clone(),
                    cwd: cwd.to_path_buf(),
                    source: e,
                },
            })?;

        Ok(CommandResult::new(
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_client_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = GitCli::new("definitely-not-a-real-vcs-client-xyz");
        let err = cli.execute(&["status".to_string()], tmp.path()).unwrap_err();
        assert!(matches!(err, EngineError::ClientNotFound(_)), "got: {:?}", err);
    }

    #[test]
    fn test_default_program_is_git() {
        assert_eq!(GitCli::default().program(), "git");
    }
}
