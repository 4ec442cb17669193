//! The `mcqdrill init` command.

use anyhow::Result;

use crate::config::CONFIG_FILE;

pub fn execute() -> Result<()> {
    if std::path::Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} if the defaults do not suit you");
    println!("  2. Run: mcqdrill import questions.txt --subject Physics --chapter Optics");
    println!("  3. Run: mcqdrill take");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mcqdrill configuration

# Where the imported bank and result history live.
data_dir = "./mcqdrill-data"

# Defaults for `mcqdrill take`; flags override these per run.
default_question_count = 10
default_time_limit_minutes = 10
shuffle_questions = true
shuffle_options = true
"#;
