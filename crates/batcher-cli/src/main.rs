//! git-batcher CLI - Bulk per-directory commits with batched pushes
//!
//! Provides:
//! - `packages`: one commit per subdirectory of `<repo>/packages`
//! - `tree`: one commit per immediate subdirectory of a repository root

mod commands;
mod helpers;
mod output;

use anyhow::{Context, Result};
use batcher_core::Settings;
use batcher_journal::{level_label, Journal, TIMESTAMP_FORMAT};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use commands::{cmd_packages, cmd_tree};
use helpers::default_log_path;

#[derive(Parser)]
#[command(name = "git-batcher")]
#[command(about = "Commit many directories one by one and push them in batches", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON settings file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (default: log.txt beside the executable)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commits every subdirectory of <REPO>/packages as "packages -> <name>"
    Packages {
        /// Path to the repository (prompted for when omitted)
        repo: Option<PathBuf>,
    },

    /// Commits every immediate subdirectory of ROOT under its own name
    Tree {
        /// Repository root holding the directories (prompted for when omitted)
        root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure console logger; journal lines are mirrored through it
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    )
    .target(env_logger::Target::Stdout)
    .format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            level_label(record.level()),
            record.args()
        )
    })
    .init();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load settings from {:?}", path))?,
        None => Settings::default(),
    };

    let log_path = match cli.log_file {
        Some(path) => path,
        None => default_log_path()?,
    };
    let mut journal = Journal::open(&log_path)
        .with_context(|| format!("Failed to open log file at {:?}", log_path))?;

    match cli.command {
        Commands::Packages { repo } => {
            cmd_packages(repo, &settings, &mut journal)?;
        }
        Commands::Tree { root } => {
            cmd_tree(root, &settings, &mut journal)?;
        }
    }

    Ok(())
}
