//! The `mcqdrill export` command.

use std::path::PathBuf;

use anyhow::{bail, Result};

use mcqdrill_report::write_report;
use mcqdrill_store::history::HistoryStore;
use mcqdrill_store::FileStore;

use crate::config::load_config_from;

pub fn execute(index: usize, output: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = HistoryStore::new(FileStore::new(&config.data_dir));

    let Some(result) = store.get_descending(index) else {
        bail!("no result at history index {index}. Run: mcqdrill history");
    };

    let path = write_report(&result, &output)?;
    println!("Exported result #{index} to {}", path.display());
    Ok(())
}
