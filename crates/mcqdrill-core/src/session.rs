//! Session builder and the live session state machine.
//!
//! The builder derives an immutable [`TestSession`] from a bank and a
//! configuration. The [`SessionController`] then owns the session for its
//! lifetime, consuming explicit [`Command`]s (rather than ad-hoc mutation)
//! and releasing a frozen [`FinishedSession`] exactly once, on the
//! transition into [`Phase::Submitted`].

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConfigError;
use crate::model::{FinishedSession, Question, TestConfiguration, TestSession};

/// Upper bound on the total time limit: one day.
pub const MAX_TIME_LIMIT_MINUTES: u32 = 1440;

/// Build a session from a bank and a configuration.
///
/// Selection: when `shuffle_questions` is set, a uniform Fisher–Yates
/// shuffle runs over a copy of the bank before taking the first
/// `question_count` entries; otherwise bank order is preserved. When
/// `shuffle_options` is set, each selected question's options are shuffled
/// independently. Shuffling never moves the `correct_answer` string, which
/// is why correctness is checked by content, not index.
pub fn build_session(
    bank: &[Question],
    config: &TestConfiguration,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Result<TestSession, ConfigError> {
    if config.question_count == 0 || config.question_count > bank.len() {
        return Err(ConfigError::InvalidQuestionCount {
            requested: config.question_count,
            bank_size: bank.len(),
        });
    }
    if config.total_time_limit_minutes == 0
        || config.total_time_limit_minutes > MAX_TIME_LIMIT_MINUTES
    {
        return Err(ConfigError::InvalidTimeLimit(
            config.total_time_limit_minutes,
        ));
    }

    let mut pool: Vec<Question> = bank.to_vec();
    if config.shuffle_questions {
        pool.shuffle(rng);
    }
    pool.truncate(config.question_count);

    if config.shuffle_options {
        for question in &mut pool {
            question.options.shuffle(rng);
        }
    }

    let count = pool.len();
    Ok(TestSession {
        questions: pool,
        answers: vec![None; count],
        started_at: now,
        total_time_limit_secs: config.total_time_limit_secs(),
        current_index: 0,
    })
}

/// A discrete event consumed by the session state machine.
///
/// All input sources (key presses, timer ticks) are normalized to these
/// commands, decoupling transition logic from where the input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select an option at the current question (last write wins).
    SelectAnswer(usize),
    /// Advance the cursor (clamped at the last question).
    Next,
    /// Move the cursor back (clamped at zero).
    Previous,
    /// One-second countdown tick.
    Tick,
    /// Manual submission.
    Submit,
}

/// Lifecycle phase of a controlled session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Countdown running; answers and navigation accepted.
    Running,
    /// The countdown reached zero; submission is in flight.
    Expired,
    /// Terminated. All further commands are no-ops.
    Submitted,
}

/// Owns a live session and applies commands to it.
pub struct SessionController {
    session: TestSession,
    time_left_secs: i64,
    phase: Phase,
}

impl SessionController {
    pub fn new(session: TestSession) -> Self {
        let time_left_secs = i64::from(session.total_time_limit_secs);
        Self {
            session,
            time_left_secs,
            phase: Phase::Running,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds remaining on the visible countdown.
    pub fn time_left_secs(&self) -> i64 {
        self.time_left_secs
    }

    pub fn session(&self) -> &TestSession {
        &self.session
    }

    /// The question under the cursor.
    pub fn current_question(&self) -> &Question {
        &self.session.questions[self.session.current_index]
    }

    /// The recorded answer for the question under the cursor.
    pub fn current_answer(&self) -> Option<usize> {
        self.session.answers[self.session.current_index]
    }

    /// Count of answered positions.
    pub fn answered_count(&self) -> usize {
        self.session.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Apply a command. Returns the frozen session on the single transition
    /// into [`Phase::Submitted`]; `None` otherwise.
    ///
    /// Submission is idempotent-guarded: once submitted, ticks, selections,
    /// and navigation all have no effect.
    pub fn apply(&mut self, command: Command, now: DateTime<Utc>) -> Option<FinishedSession> {
        if self.phase != Phase::Running {
            return None;
        }

        match command {
            Command::SelectAnswer(option_index) => {
                let option_count = self.current_question().options.len();
                if option_index < option_count {
                    let cursor = self.session.current_index;
                    self.session.answers[cursor] = Some(option_index);
                } else {
                    tracing::warn!(
                        option_index,
                        option_count,
                        "ignoring out-of-range answer selection"
                    );
                }
                None
            }
            Command::Next => {
                if self.session.current_index + 1 < self.session.questions.len() {
                    self.session.current_index += 1;
                }
                None
            }
            Command::Previous => {
                self.session.current_index = self.session.current_index.saturating_sub(1);
                None
            }
            Command::Tick => {
                self.time_left_secs -= 1;
                if self.time_left_secs <= 0 {
                    self.phase = Phase::Expired;
                    return Some(self.finish(now));
                }
                None
            }
            Command::Submit => Some(self.finish(now)),
        }
    }

    fn finish(&mut self, now: DateTime<Utc>) -> FinishedSession {
        self.phase = Phase::Submitted;
        FinishedSession {
            session: self.session.clone(),
            submitted_at: now,
        }
    }
}
