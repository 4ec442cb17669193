//! The `mcqdrill take` command: the interactive timed session.
//!
//! A thin event-driven shell around the core state machine. Two tasks feed
//! one command channel: a 1 Hz ticker and a stdin reader. The main loop
//! applies each command to the [`SessionController`] and stops on the first
//! terminating transition, at which point the ticker handle is aborted —
//! there is never more than one active timer.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use mcqdrill_core::model::{FinishedSession, TestConfiguration};
use mcqdrill_core::scorer::score_session;
use mcqdrill_core::session::{build_session, Command, Phase, SessionController};
use mcqdrill_store::bank::BankStore;
use mcqdrill_store::history::HistoryStore;
use mcqdrill_store::FileStore;

use crate::config::load_config_from;

pub async fn execute(
    count: Option<usize>,
    time_limit: Option<u32>,
    shuffle_questions: Option<bool>,
    shuffle_options: Option<bool>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let kv = FileStore::new(&config.data_dir);

    let Some(stored) = BankStore::new(kv.clone()).load() else {
        bail!("no question bank imported yet. Run: mcqdrill import <file> --subject ... --chapter ...");
    };

    // An explicit --count out of range is surfaced as an error by the
    // builder; only the config default is clamped to the bank size.
    let question_count = match count {
        Some(requested) => requested,
        None => config.default_question_count.min(stored.questions.len()),
    };

    let test_config = TestConfiguration {
        question_count,
        total_time_limit_minutes: time_limit.unwrap_or(config.default_time_limit_minutes),
        shuffle_questions: shuffle_questions.unwrap_or(config.shuffle_questions),
        shuffle_options: shuffle_options.unwrap_or(config.shuffle_options),
    };

    let mut rng = StdRng::from_entropy();
    let session = build_session(&stored.questions, &test_config, &mut rng, Utc::now())
        .context("could not build session")?;

    println!(
        "{} questions, {} minute(s). Answer with a-d, n(ext), p(revious), submit.",
        session.questions.len(),
        test_config.total_time_limit_minutes
    );

    let mut controller = SessionController::new(session);
    let finished = run_session_loop(&mut controller).await?;

    let result = score_session(&finished, &stored.metadata.subject, &stored.metadata.chapter);
    HistoryStore::new(kv)
        .append(&result)
        .context("failed to record result in history")?;

    if controller.time_left_secs() <= 0 {
        println!("\nTime is up — test submitted automatically.");
    }
    println!(
        "\nScore: {}/{} ({}%) in {}s",
        result.score, result.total, result.percentage, result.time_taken_secs
    );
    println!("Saved to history. Run: mcqdrill history");

    Ok(())
}

/// Drive the controller until it terminates.
async fn run_session_loop(controller: &mut SessionController) -> Result<FinishedSession> {
    let (tx, mut rx) = mpsc::channel::<Command>(16);

    let tick_tx = tx.clone();
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        // The first tick resolves immediately; skip it so ticks mean elapsed seconds.
        interval.tick().await;
        loop {
            interval.tick().await;
            if tick_tx.send(Command::Tick).await.is_err() {
                break;
            }
        }
    });

    let input_tx = tx;
    let reader = tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match parse_input(&line) {
                Some(command) => {
                    let done = command == Command::Submit;
                    if input_tx.send(command).await.is_err() || done {
                        break;
                    }
                }
                None => eprintln!("Unrecognized input: {line:?} (use a-d, n, p, submit)"),
            }
        }
    });

    render_question(controller);

    let finished = loop {
        let Some(command) = rx.recv().await else {
            bail!("input closed before the session finished");
        };
        let redraw = !matches!(command, Command::Tick);
        if let Some(finished) = controller.apply(command, Utc::now()) {
            break finished;
        }
        if redraw {
            render_question(controller);
        }
    };

    // Stop the countdown the moment the session leaves Running.
    ticker.abort();
    reader.abort();
    debug_assert_eq!(controller.phase(), Phase::Submitted);

    Ok(finished)
}

/// Map one line of user input to a session command.
fn parse_input(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "a" | "1" => Some(Command::SelectAnswer(0)),
        "b" | "2" => Some(Command::SelectAnswer(1)),
        "c" | "3" => Some(Command::SelectAnswer(2)),
        "d" | "4" => Some(Command::SelectAnswer(3)),
        "n" | "next" => Some(Command::Next),
        "p" | "prev" | "previous" => Some(Command::Previous),
        "s" | "submit" => Some(Command::Submit),
        _ => None,
    }
}

fn render_question(controller: &SessionController) {
    let session = controller.session();
    let question = controller.current_question();
    let time_left = controller.time_left_secs().max(0);

    println!(
        "\n[{}/{}] {:02}:{:02} left — {}",
        session.current_index + 1,
        session.questions.len(),
        time_left / 60,
        time_left % 60,
        question.text
    );
    for (i, option) in question.options.iter().enumerate() {
        let marker = if controller.current_answer() == Some(i) {
            '>'
        } else {
            ' '
        };
        let letter = (b'a' + i as u8) as char;
        println!(" {marker} {letter}) {option}");
    }
}
