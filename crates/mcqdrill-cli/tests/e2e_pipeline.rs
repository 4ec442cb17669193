//! End-to-end pipeline test: parse -> build -> answer -> score -> persist -> export.

use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use mcqdrill_core::model::TestConfiguration;
use mcqdrill_core::parser::parse_bank;
use mcqdrill_core::scorer::score_session;
use mcqdrill_core::session::{build_session, Command, SessionController};
use mcqdrill_report::{read_detail_rows, render_report, write_report, UNANSWERED};
use mcqdrill_store::history::HistoryStore;
use mcqdrill_store::FileStore;

const BANK: &str = "\
id|question|option1|option2|option3|option4|answer|tags
q1|First one?|A|B|C||B|t
q2|Second one?|X|Y|||X|t
q3|Third one?|P|Q|||Q|t
";

fn config() -> TestConfiguration {
    TestConfiguration {
        question_count: 3,
        total_time_limit_minutes: 5,
        shuffle_questions: false,
        shuffle_options: false,
    }
}

#[test]
fn full_pipeline_perfect_score() {
    let parsed = parse_bank(BANK).unwrap();
    assert!(parsed.skipped.is_empty());

    let started = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let session = build_session(&parsed.questions, &config(), &mut rng, started).unwrap();
    let mut controller = SessionController::new(session);

    // Select B, X, Q.
    for &selection in &[1usize, 0, 1] {
        controller.apply(Command::SelectAnswer(selection), started);
        controller.apply(Command::Next, started);
    }
    let finished = controller
        .apply(Command::Submit, started + Duration::seconds(90))
        .unwrap();

    let result = score_session(&finished, "General", "One");
    assert_eq!(result.score, 3);
    assert_eq!(result.percentage, 100);
    assert_eq!(result.time_taken_secs, 90);

    // Persist, read back, export, and parse the export.
    let dir = TempDir::new().unwrap();
    let history = HistoryStore::new(FileStore::new(dir.path().join("data")));
    history.append(&result).unwrap();

    let stored = history.get_descending(0).unwrap();
    assert_eq!(stored.score, 3);

    let path = write_report(&stored, &dir.path().join("out")).unwrap();
    let report = std::fs::read_to_string(path).unwrap();
    let rows = read_detail_rows(&report);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.correct));
    assert_eq!(rows[0].user_answer, "B");
    assert_eq!(rows[1].user_answer, "X");
    assert_eq!(rows[2].user_answer, "Q");
}

#[test]
fn full_pipeline_zero_score_with_unanswered() {
    let parsed = parse_bank(BANK).unwrap();

    let started = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let session = build_session(&parsed.questions, &config(), &mut rng, started).unwrap();
    let mut controller = SessionController::new(session);

    // Select A, Y, and leave q3 unanswered.
    controller.apply(Command::SelectAnswer(0), started);
    controller.apply(Command::Next, started);
    controller.apply(Command::SelectAnswer(1), started);
    let finished = controller
        .apply(Command::Submit, started + Duration::seconds(30))
        .unwrap();

    let result = score_session(&finished, "General", "One");
    assert_eq!(result.score, 0);
    assert_eq!(result.percentage, 0);

    let report = render_report(&result);
    let rows = read_detail_rows(&report);
    assert!(rows.iter().all(|r| !r.correct));
    assert_eq!(rows[2].user_answer, UNANSWERED);
}

#[test]
fn option_shuffling_does_not_change_scoring_semantics() {
    let parsed = parse_bank(BANK).unwrap();
    let started = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();

    let mut cfg = config();
    cfg.shuffle_options = true;
    let mut rng = StdRng::seed_from_u64(99);
    let session = build_session(&parsed.questions, &cfg, &mut rng, started).unwrap();
    let mut controller = SessionController::new(session);

    // Answer every question by locating the correct option text, wherever
    // the shuffle put it.
    for _ in 0..3 {
        let question = controller.current_question().clone();
        let correct_index = question
            .options
            .iter()
            .position(|o| question.is_correct(o))
            .expect("bank is scorable");
        controller.apply(Command::SelectAnswer(correct_index), started);
        controller.apply(Command::Next, started);
    }
    let finished = controller
        .apply(Command::Submit, started + Duration::seconds(10))
        .unwrap();

    let result = score_session(&finished, "General", "One");
    assert_eq!(result.score, 3);
    assert_eq!(result.percentage, 100);
}
