//! Deterministic scoring of terminated sessions.
//!
//! The scorer consumes a [`FinishedSession`] and produces an immutable
//! [`TestResult`]; it has no side effects beyond building the record.

use uuid::Uuid;

use crate::model::{FinishedSession, TestResult};

/// Score a terminated session.
///
/// For each position, an answered index is resolved to its option text and
/// compared to the question's correct answer case-insensitively; unanswered
/// positions never count. Percentage is `round(100 * score / total)` using
/// standard rounding (half away from zero). Builder-produced sessions always
/// have at least one question; an empty session scores 0 without dividing.
///
/// `time_taken_secs` is wall-clock elapsed between start and submission,
/// not derived from the countdown, so an early submit reflects real time.
pub fn score_session(finished: &FinishedSession, subject: &str, chapter: &str) -> TestResult {
    let session = &finished.session;
    let total = session.questions.len() as u32;

    let score = session
        .questions
        .iter()
        .zip(&session.answers)
        .filter(|(question, answer)| {
            answer
                .and_then(|index| question.options.get(index))
                .is_some_and(|selected| question.is_correct(selected))
        })
        .count() as u32;

    let percentage = if total == 0 {
        0
    } else {
        (100.0 * f64::from(score) / f64::from(total)).round() as u32
    };

    TestResult {
        id: Uuid::new_v4(),
        score,
        total,
        percentage,
        time_taken_secs: finished.elapsed_secs(),
        subject: subject.to_string(),
        chapter: chapter.to_string(),
        date: finished.submitted_at,
        questions: session.questions.clone(),
        answers: session.answers.clone(),
        total_time_limit_secs: session.total_time_limit_secs,
    }
}
