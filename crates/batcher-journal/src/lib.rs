//! Batcher Journal - Append-only outcome log
//!
//! The journal is the only persisted record of a run. Every classified
//! outcome is written as one `<timestamp> [<LEVEL>] <message>` line to the
//! log file and mirrored to the console through the `log` facade.
//!
//! A journal is an explicit handle passed to every component that records
//! outcomes; an in-memory journal lets tests inspect what was recorded.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::Level;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp layout of journal lines, e.g. `2025-03-01 14:02:11,417`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Level name as written to the journal (`WARN` is spelled out)
pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// One recorded outcome
#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            level_label(self.level),
            self.message
        )
    }
}

/// Outcome log for one run
pub struct Journal {
    /// Log file opened in append mode
    file: Option<File>,

    /// Location of the log file, if any
    path: Option<PathBuf>,

    /// Entries kept in memory (only when capturing)
    entries: Vec<JournalEntry>,
    capture: bool,

    /// Number of lines that could not be written to the file
    write_failures: usize,
}

impl Journal {
    /// Opens or creates the log file at the given location, appending to it
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {:?}", parent))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file at {:?}", path))?;

        Ok(Self {
            file: Some(file),
            path: Some(path.to_path_buf()),
            entries: Vec::new(),
            capture: false,
            write_failures: 0,
        })
    }

    /// Journal without a backing file that keeps every entry
    pub fn in_memory() -> Self {
        Self {
            file: None,
            path: None,
            entries: Vec::new(),
            capture: true,
            write_failures: 0,
        }
    }

    /// Keeps entries in memory in addition to writing them
    pub fn with_capture(mut self) -> Self {
        self.capture = true;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Records one outcome line
    pub fn record(&mut self, level: Level, message: impl Into<String>) {
        let entry = JournalEntry {
            timestamp: Local::now(),
            level,
            message: message.into(),
        };

        if let Some(file) = self.file.as_mut() {
            if let Err(e) = writeln!(file, "{}", entry) {
                self.write_failures += 1;
                log::error!("Failed to write to log file {:?}: {}", self.path, e);
            }
        }

        log::log!(level, "{}", entry.message);

        if self.capture {
            self.entries.push(entry);
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(Level::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(Level::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Level::Error, message);
    }

    /// Flushes buffered lines to disk
    pub fn flush(&mut self) -> Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.flush().context("Failed to flush log file")?;
        }
        Ok(())
    }

    /// Entries recorded so far (empty unless capturing)
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Captured messages at the given level, in order
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Whether any captured message at `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }

    pub fn write_failures(&self) -> usize {
        self.write_failures
    }
}
