//! The `mcqdrill import` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use mcqdrill_core::parser::{parse_bank, validate_bank};
use mcqdrill_store::bank::{BankMetadata, BankStore, StoredBank};
use mcqdrill_store::FileStore;

use crate::config::load_config_from;

pub fn execute(
    file: PathBuf,
    subject: String,
    chapter: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let raw = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read bank file: {}", file.display()))?;

    let parsed = parse_bank(&raw)
        .with_context(|| format!("failed to parse bank file: {}", file.display()))?;

    for row in &parsed.skipped {
        println!("  Skipped line {}: {}", row.line, row.reason);
    }

    let warnings = validate_bank(&parsed.questions);
    for warning in &warnings {
        match &warning.question_id {
            Some(id) => println!("  Warning [{}]: {}", id, warning.message),
            None => println!("  Warning: {}", warning.message),
        }
    }

    let stored = StoredBank {
        questions: parsed.questions,
        metadata: BankMetadata {
            upload_date: Utc::now(),
            subject,
            chapter,
        },
    };

    let store = BankStore::new(FileStore::new(&config.data_dir));
    store.save(&stored).context("failed to persist bank")?;

    println!(
        "Imported {} questions ({} skipped, {} warnings) for {} / {}",
        stored.questions.len(),
        parsed.skipped.len(),
        warnings.len(),
        stored.metadata.subject,
        stored.metadata.chapter
    );
    println!("Run: mcqdrill take");

    Ok(())
}
