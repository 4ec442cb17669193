//! Error taxonomy for bank parsing and session configuration.
//!
//! Defined as typed enums so callers can match on the failure class instead
//! of string matching. Every variant maps to a user-facing notification; none
//! of them is retried automatically.

use thiserror::Error;

/// Errors produced while parsing a raw question bank.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no data rows (fewer than two raw lines).
    #[error("malformed input: expected a header line and at least one data row")]
    MalformedInput,

    /// Data rows were present but none of them produced a valid question.
    #[error("empty bank: no valid questions found in input")]
    EmptyBank,
}

/// Errors produced while validating a test configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `question_count` is zero or exceeds the bank size.
    #[error("invalid question count: requested {requested}, bank has {bank_size}")]
    InvalidQuestionCount { requested: usize, bank_size: usize },

    /// The total time limit must be between one minute and one day.
    #[error("invalid time limit: {0} minutes (must be 1 to 1440)")]
    InvalidTimeLimit(u32),
}
