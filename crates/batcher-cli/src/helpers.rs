//! Helper functions for CLI operations

use anyhow::{Context, Result};
use batcher_core::LOG_FILE_NAME;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Log file location beside the running executable
pub fn default_log_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(LOG_FILE_NAME))
}

/// Uses the given path, or asks for one on stdin
pub fn resolve_path(arg: Option<PathBuf>, prompt: &str) -> Result<PathBuf> {
    match arg {
        Some(path) => Ok(path),
        None => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            prompt_for_path(prompt, &mut input, &mut std::io::stdout())
        }
    }
}

/// Prints `prompt` and reads one trimmed line as a path
///
/// An empty answer yields an empty path, which later fails the directory check.
pub fn prompt_for_path<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{}", prompt).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read path from stdin")?;
    Ok(PathBuf::from(line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_trims_answer() {
        let mut input = Cursor::new("  /srv/archive  \n");
        let mut output = Vec::new();
        let path = prompt_for_path("Path: ", &mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::from("/srv/archive"));
        assert_eq!(String::from_utf8(output).unwrap(), "Path: ");
    }

    #[test]
    fn test_prompt_with_closed_stdin_gives_empty_path() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let path = prompt_for_path("Path: ", &mut input, &mut output).unwrap();
        assert_eq!(path, PathBuf::new());
    }

    #[test]
    fn test_explicit_path_skips_prompt() {
        let path = resolve_path(Some(PathBuf::from("/repo")), "unused").unwrap();
        assert_eq!(path, PathBuf::from("/repo"));
    }

    #[test]
    fn test_default_log_path_is_log_txt() {
        let path = default_log_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "log.txt");
    }
}
