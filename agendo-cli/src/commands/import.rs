use std::path::Path;

use agendo_core::ics;
use agendo_core::store::{ImportNotifier, TaskStore};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;
use crate::render::Render;
use crate::store::JsonTaskStore;

/// Stands in for the dashboard's view-refresh channel.
struct LogNotifier;

impl ImportNotifier for LogNotifier {
    fn notify_imported(&self, created: usize) {
        log::info!("{} task(s) persisted, views should refresh", created);
    }
}

pub fn run(file: &Path, dry_run: bool, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let outcome = ics::import(&content);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.tasks)?);
    } else {
        for task in &outcome.tasks {
            println!("{}", task.render());
        }
    }

    if outcome.tasks.is_empty() {
        let mut message = format!("No events found in {}", file.display());
        if outcome.skipped > 0 {
            message.push_str(&format!(" ({} malformed block(s) skipped)", outcome.skipped));
        }
        println!("{}", message.yellow());
        return Ok(());
    }

    if dry_run {
        println!(
            "\n{} imported, {} skipped {}",
            outcome.tasks.len(),
            outcome.skipped,
            "(dry run, nothing persisted)".dimmed()
        );
        return Ok(());
    }

    let config = GlobalConfig::load()?;
    let mut store = JsonTaskStore::new(config.tasks_path());
    let stats = store.create_many(&outcome.tasks)?;

    println!(
        "\n{}",
        format!(
            "{} imported, {} skipped, {} duplicate(s)",
            stats.created, outcome.skipped, stats.duplicates
        )
        .green()
    );

    if stats.created > 0 {
        LogNotifier.notify_imported(stats.created);
    }

    Ok(())
}
