//! Pipe-delimited question bank parser.
//!
//! Input format: UTF-8 text, one question per line, fields separated by `|`
//! (not comma, to tolerate commas inside question text). The first line is a
//! header and is discarded without schema validation. Row shape:
//!
//! ```text
//! id|question|option1|option2|option3|option4|answer|tags[|timeLimitSeconds]
//! ```

use crate::error::ParseError;
use crate::model::{Question, DEFAULT_QUESTION_TIME_LIMIT_SECS};

/// Field separator for bank rows.
pub const FIELD_DELIMITER: char = '|';

/// Minimum fields for a row to be accepted as a question.
const MIN_FIELDS: usize = 8;

/// A data row that was rejected during parsing.
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based line number in the raw input.
    pub line: usize,
    /// Why the row was rejected.
    pub reason: String,
}

/// Parser output: accepted questions plus every rejected row.
#[derive(Debug, Clone)]
pub struct ParsedBank {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedRow>,
}

/// Parse raw delimited text into a question bank.
///
/// Rows with fewer than 8 fields are skipped, reported in
/// [`ParsedBank::skipped`], and logged; they do not fail the parse. Option
/// fields are trimmed and empty ones filtered out, so a question may carry
/// fewer than 4 displayable options.
///
/// Fails with [`ParseError::MalformedInput`] when there are no data rows at
/// all, and with [`ParseError::EmptyBank`] when data rows exist but none of
/// them produced a question.
pub fn parse_bank(raw: &str) -> Result<ParsedBank, ParseError> {
    let lines: Vec<(usize, &str)> = raw
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(ParseError::MalformedInput);
    }

    let mut questions = Vec::new();
    let mut skipped = Vec::new();

    // First non-empty line is the header; everything after is data.
    for &(line_no, line) in &lines[1..] {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();

        if fields.len() < MIN_FIELDS {
            let reason = format!(
                "expected at least {MIN_FIELDS} fields, got {}",
                fields.len()
            );
            tracing::warn!(line = line_no, "skipping bank row: {reason}");
            skipped.push(SkippedRow {
                line: line_no,
                reason,
            });
            continue;
        }

        let options: Vec<String> = fields[2..6]
            .iter()
            .filter(|o| !o.is_empty())
            .map(|o| o.to_string())
            .collect();

        let time_limit_secs = fields
            .get(8)
            .and_then(|f| f.parse::<u32>().ok())
            .unwrap_or(DEFAULT_QUESTION_TIME_LIMIT_SECS);

        questions.push(Question {
            id: fields[0].to_string(),
            text: fields[1].to_string(),
            options,
            correct_answer: fields[6].to_string(),
            tags: fields[7].to_string(),
            time_limit_secs,
        });
    }

    if questions.is_empty() {
        return Err(ParseError::EmptyBank);
    }

    Ok(ParsedBank { questions, skipped })
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a parsed bank for data-quality issues.
///
/// None of these are fatal: a bank with warnings can still back a session,
/// but an unscorable question will always be judged incorrect.
pub fn validate_bank(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate IDs
    let mut seen_ids = std::collections::HashSet::new();
    for q in questions {
        if !seen_ids.insert(&q.id) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    // Answer matching no option (case-insensitive)
    for q in questions {
        if !q.is_scorable() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "correct answer matches no option; question is unscorable".into(),
            });
        }
    }

    // Too few displayable options
    for q in questions {
        if q.options.len() < 2 {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("only {} non-empty option(s)", q.options.len()),
            });
        }
    }

    warnings
}
