//! Core data model types for mcqdrill.
//!
//! These are the fundamental types the whole system uses to represent
//! questions, test configurations, live sessions, and scored results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default per-question time limit in seconds, applied when the bank row
/// omits the field. Carried through to sessions but not used by scoring.
pub const DEFAULT_QUESTION_TIME_LIMIT_SECS: u32 = 30;

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within a bank.
    pub id: String,
    /// The question text shown to the user.
    pub text: String,
    /// Ordered answer options (2–4 non-empty entries after parsing).
    pub options: Vec<String>,
    /// The correct answer, matched against option text case-insensitively.
    pub correct_answer: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: String,
    /// Per-question time limit in seconds.
    #[serde(default = "default_question_time_limit")]
    pub time_limit_secs: u32,
}

fn default_question_time_limit() -> u32 {
    DEFAULT_QUESTION_TIME_LIMIT_SECS
}

impl Question {
    /// Whether the given option text matches the correct answer.
    ///
    /// Comparison is by content, not by index, so it is invariant under
    /// option shuffling. Case-insensitive with surrounding whitespace
    /// ignored.
    pub fn is_correct(&self, option_text: &str) -> bool {
        option_text.trim().to_lowercase() == self.correct_answer.trim().to_lowercase()
    }

    /// Whether any option matches the correct answer.
    ///
    /// A question failing this is a data-quality condition, not a parse
    /// failure: the session can still be built, but the question can never
    /// be scored correct.
    pub fn is_scorable(&self) -> bool {
        self.options.iter().any(|o| self.is_correct(o))
    }
}

/// User-chosen parameters for a test session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConfiguration {
    /// How many questions to draw from the bank (1..=bank size).
    pub question_count: usize,
    /// Total time limit for the whole session, in minutes.
    pub total_time_limit_minutes: u32,
    /// Shuffle question order before selection.
    pub shuffle_questions: bool,
    /// Independently shuffle each selected question's options.
    pub shuffle_options: bool,
}

impl TestConfiguration {
    /// Total time limit in seconds. Saturates rather than overflowing for
    /// out-of-range minute values; the builder rejects those up front.
    pub fn total_time_limit_secs(&self) -> u32 {
        self.total_time_limit_minutes.saturating_mul(60)
    }
}

/// One in-progress attempt at a subset of the bank.
///
/// Mutable only through the [`crate::session::SessionController`]: selecting
/// an answer at the cursor, moving the cursor, and terminating. Once
/// terminated it is frozen into a [`FinishedSession`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSession {
    /// Selected (and possibly shuffled) questions.
    pub questions: Vec<Question>,
    /// Selected option index per question position; `None` = unanswered.
    /// Always the same length as `questions`.
    pub answers: Vec<Option<usize>>,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// Total time limit in seconds.
    pub total_time_limit_secs: u32,
    /// 0-based cursor, always within `0..questions.len()`.
    pub current_index: usize,
}

/// A terminated session, frozen and ready for the scorer.
#[derive(Debug, Clone)]
pub struct FinishedSession {
    /// The session snapshot at termination.
    pub session: TestSession,
    /// Wall-clock submission time (manual or expiry-triggered).
    pub submitted_at: DateTime<Utc>,
}

impl FinishedSession {
    /// Wall-clock seconds actually elapsed, independent of the countdown.
    pub fn elapsed_secs(&self) -> i64 {
        (self.submitted_at - self.session.started_at)
            .num_seconds()
            .max(0)
    }
}

/// The scored, immutable outcome of a completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Unique result identifier.
    pub id: Uuid,
    /// Number of correctly answered questions.
    pub score: u32,
    /// Number of questions in the session.
    pub total: u32,
    /// `round(100 * score / total)`, round-half-away-from-zero.
    pub percentage: u32,
    /// Wall-clock seconds elapsed between start and submission.
    pub time_taken_secs: i64,
    /// Subject of the bank the session was drawn from.
    pub subject: String,
    /// Chapter of the bank the session was drawn from.
    pub chapter: String,
    /// Submission timestamp.
    pub date: DateTime<Utc>,
    /// Question snapshot, in session order, for later review and export.
    pub questions: Vec<Question>,
    /// Answer snapshot, aligned with `questions`.
    pub answers: Vec<Option<usize>>,
    /// The session's configured time limit in seconds.
    pub total_time_limit_secs: u32,
}

impl TestResult {
    /// Resolve the selected option text at a question position, if answered.
    pub fn answer_text(&self, position: usize) -> Option<&str> {
        let question = self.questions.get(position)?;
        let selected = (*self.answers.get(position)?)?;
        question.options.get(selected).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(options: &[&str], answer: &str) -> Question {
        Question {
            id: "q1".into(),
            text: "What?".into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: answer.into(),
            tags: String::new(),
            time_limit_secs: DEFAULT_QUESTION_TIME_LIMIT_SECS,
        }
    }

    #[test]
    fn correctness_is_case_insensitive() {
        let q = question(&["Paris", "London"], "paris");
        assert!(q.is_correct("Paris"));
        assert!(q.is_correct("PARIS"));
        assert!(!q.is_correct("London"));
    }

    #[test]
    fn correctness_ignores_surrounding_whitespace() {
        let q = question(&["  Paris ", "London"], "Paris");
        assert!(q.is_correct("  Paris "));
    }

    #[test]
    fn scorable_requires_matching_option() {
        let q = question(&["A", "B"], "C");
        assert!(!q.is_scorable());
        let q = question(&["A", "B"], "b");
        assert!(q.is_scorable());
    }

    #[test]
    fn question_serde_defaults_time_limit() {
        let json = r#"{
            "id": "q1",
            "text": "What?",
            "options": ["A", "B"],
            "correct_answer": "A"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.time_limit_secs, DEFAULT_QUESTION_TIME_LIMIT_SECS);
        assert_eq!(q.tags, "");
    }

    #[test]
    fn configuration_time_limit_in_seconds() {
        let config = TestConfiguration {
            question_count: 5,
            total_time_limit_minutes: 10,
            shuffle_questions: false,
            shuffle_options: false,
        };
        assert_eq!(config.total_time_limit_secs(), 600);
    }
}
