//! The `mcqdrill history` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use mcqdrill_store::history::HistoryStore;
use mcqdrill_store::FileStore;

use crate::config::load_config_from;

fn open(config_path: Option<PathBuf>) -> Result<HistoryStore<FileStore>> {
    let config = load_config_from(config_path.as_deref())?;
    Ok(HistoryStore::new(FileStore::new(&config.data_dir)))
}

pub fn list(limit: Option<usize>, config_path: Option<PathBuf>) -> Result<()> {
    let store = open(config_path)?;
    let results = store.list_descending();

    if results.is_empty() {
        println!("No past results. Run: mcqdrill take");
        return Ok(());
    }

    let shown = limit.unwrap_or(results.len()).min(results.len());

    let mut table = Table::new();
    table.set_header(vec![
        "#", "Date", "Subject", "Chapter", "Score", "%", "Time",
    ]);
    for (index, result) in results.iter().take(shown).enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(result.date.format("%Y-%m-%d %H:%M")),
            Cell::new(&result.subject),
            Cell::new(&result.chapter),
            Cell::new(format!("{}/{}", result.score, result.total)),
            Cell::new(format!("{}%", result.percentage)),
            Cell::new(format!("{}s", result.time_taken_secs)),
        ]);
    }

    println!("{table}");
    println!("{} of {} result(s)", shown, results.len());
    Ok(())
}

pub fn delete(index: usize, config_path: Option<PathBuf>) -> Result<()> {
    let store = open(config_path)?;
    let removed = store
        .delete_at(index)
        .context("failed to update history")?;

    if removed {
        println!("Deleted result #{index}.");
    } else {
        println!("No result at index {index}; nothing deleted.");
    }
    Ok(())
}

pub fn clear(config_path: Option<PathBuf>) -> Result<()> {
    let store = open(config_path)?;
    store.clear().context("failed to clear history")?;
    println!("History cleared.");
    Ok(())
}
