//! CLI configuration file handling.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "mcqdrill.toml";

/// Top-level mcqdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Directory holding the persisted bank and history.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Default question count for `take`.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
    /// Default total time limit in minutes for `take`.
    #[serde(default = "default_time_limit")]
    pub default_time_limit_minutes: u32,
    /// Default for shuffling question order.
    #[serde(default = "default_true")]
    pub shuffle_questions: bool,
    /// Default for shuffling options.
    #[serde(default = "default_true")]
    pub shuffle_options: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./mcqdrill-data")
}
fn default_question_count() -> usize {
    10
}
fn default_time_limit() -> u32 {
    10
}
fn default_true() -> bool {
    true
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_question_count: default_question_count(),
            default_time_limit_minutes: default_time_limit(),
            shuffle_questions: true,
            shuffle_options: true,
        }
    }
}

/// Load configuration.
///
/// An explicit path must exist; otherwise `./mcqdrill.toml` is used when
/// present, and built-in defaults when not.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.exists() {
                return Ok(DrillConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: DrillConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    Ok(config)
}
