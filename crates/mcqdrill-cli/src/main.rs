//! mcqdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mcqdrill", version, about = "Timed multiple-choice quiz practice")]
struct Cli {
    /// Config file path (default: ./mcqdrill.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a pipe-delimited question bank
    Import {
        /// Path to the bank file
        file: PathBuf,

        /// Subject the bank covers
        #[arg(long)]
        subject: String,

        /// Chapter the bank covers
        #[arg(long)]
        chapter: String,
    },

    /// Take a timed test from the imported bank
    Take {
        /// Number of questions (default from config)
        #[arg(long)]
        count: Option<usize>,

        /// Total time limit in minutes (default from config)
        #[arg(long)]
        time_limit: Option<u32>,

        /// Shuffle question order
        #[arg(long)]
        shuffle_questions: Option<bool>,

        /// Shuffle each question's options
        #[arg(long)]
        shuffle_options: Option<bool>,
    },

    /// Show or edit past results
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Export a past result as CSV
    Export {
        /// Newest-first index from `mcqdrill history`
        index: usize,

        /// Output directory
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Create a starter config file
    Init,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List past results, newest first (default)
    List {
        /// Show at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Delete one result by its newest-first index
    Delete {
        /// Index from `mcqdrill history`
        index: usize,
    },

    /// Delete all past results
    Clear,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mcqdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    let result = match cli.command {
        Commands::Import {
            file,
            subject,
            chapter,
        } => commands::import::execute(file, subject, chapter, config_path),
        Commands::Take {
            count,
            time_limit,
            shuffle_questions,
            shuffle_options,
        } => {
            commands::take::execute(
                count,
                time_limit,
                shuffle_questions,
                shuffle_options,
                config_path,
            )
            .await
        }
        Commands::History { action } => {
            match action.unwrap_or(HistoryAction::List { limit: None }) {
                HistoryAction::List { limit } => commands::history::list(limit, config_path),
                HistoryAction::Delete { index } => commands::history::delete(index, config_path),
                HistoryAction::Clear => commands::history::clear(config_path),
            }
        }
        Commands::Export { index, output } => commands::export::execute(index, output, config_path),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
