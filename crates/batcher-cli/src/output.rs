//! Console summary of a finished run

use batcher_core::ItemOutcome;
use batcher_engine::RunStats;
use batcher_journal::Journal;
use colored::Colorize;
use tabled::{settings::{object::Rows, Color, Modify, Style}, Table, Tabled};

/// Table row for an item that did not commit cleanly
#[derive(Tabled)]
pub struct OutcomeRow {
    #[tabled(rename = "Directory")]
    pub name: String,
    #[tabled(rename = "Outcome")]
    pub outcome: String,
    #[tabled(rename = "Fatal")]
    pub fatal: String,
    #[tabled(rename = "Removed")]
    pub removed: String,
}

impl From<&ItemOutcome> for OutcomeRow {
    fn from(outcome: &ItemOutcome) -> Self {
        let yes_no = |flag: bool| (if flag { "yes" } else { "-" }).to_string();
        Self {
            name: outcome.name.clone(),
            outcome: outcome.state.to_string(),
            fatal: yes_no(outcome.fatal),
            removed: yes_no(outcome.removed),
        }
    }
}

/// Prints run totals, a table of failed items and any lost log lines
pub fn print_summary(stats: &RunStats, journal: &Journal) {
    println!("\n{}", "Run Summary:".bright_cyan().bold());
    println!("  {}: {}", "Directories".bright_yellow(), stats.items.to_string().bold());
    println!("  {}: {}", "Committed".bright_green(), stats.committed.to_string().bold());
    println!("  {}: {}", "Unchanged".bright_yellow(), stats.skipped.to_string().bold());
    println!("  {}: {}", "Nothing to commit".bright_yellow(), stats.commit_noop.to_string().bold());
    println!(
        "  {}: {} ok, {} failed",
        "Pushes".bright_yellow(),
        stats.pushes_succeeded.to_string().bold(),
        stats.pushes_failed.to_string().bold()
    );

    let lost = journal.write_failures();
    if lost > 0 {
        let path = journal
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        log::warn!("{} log line(s) could not be written to {}", lost, path);
        println!(
            "\n{} {} log line(s) could not be written to {}",
            "⚠".yellow(),
            lost.to_string().bold(),
            path
        );
    }

    let rows: Vec<OutcomeRow> = stats.failures().map(OutcomeRow::from).collect();
    if rows.is_empty() {
        if lost == 0 {
            println!("\n{} No failures", "✅".green());
        }
        return;
    }

    println!("\n{} {} failed director{} (see log for details):", "❌".red(), rows.len(), if rows.len() == 1 { "y" } else { "ies" });
    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);
}
