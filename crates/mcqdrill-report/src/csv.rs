//! CSV rendering of a [`TestResult`].
//!
//! Output is comma-separated even though bank import is pipe-separated:
//! exports are meant for spreadsheet consumers, and the historical file
//! format is kept for compatibility. Fields containing the delimiter, a
//! quote, or a newline are double-quoted with inner quotes doubled.
//!
//! Layout: a header block (subject, chapter, score, percentage, time taken,
//! time limit, date), a blank line, then a per-question detail table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mcqdrill_core::model::TestResult;

/// Column header of the detail table.
const DETAIL_HEADER: &str = "Question,Your Answer,Correct Answer,Result";

/// Sentinel shown for unanswered positions.
pub const UNANSWERED: &str = "Not Answered";

/// Quote a field for CSV output when it needs it.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render a result as CSV text.
pub fn render_report(result: &TestResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Subject,{}\n", escape(&result.subject)));
    out.push_str(&format!("Chapter,{}\n", escape(&result.chapter)));
    out.push_str(&format!("Score,{}/{}\n", result.score, result.total));
    out.push_str(&format!("Percentage,{}%\n", result.percentage));
    out.push_str(&format!("Time Taken,{}s\n", result.time_taken_secs));
    out.push_str(&format!(
        "Total Time Limit,{}s\n",
        result.total_time_limit_secs
    ));
    out.push_str(&format!("Date,{}\n", result.date.to_rfc3339()));
    out.push('\n');

    out.push_str(DETAIL_HEADER);
    out.push('\n');

    for (position, question) in result.questions.iter().enumerate() {
        let user_answer = result.answer_text(position).unwrap_or(UNANSWERED);
        let verdict = if result.answer_text(position).is_some_and(|a| question.is_correct(a)) {
            "Correct"
        } else {
            "Incorrect"
        };
        out.push_str(&format!(
            "{},{},{},{}\n",
            escape(&question.text),
            escape(user_answer),
            escape(&question.correct_answer),
            verdict
        ));
    }

    out
}

/// Export filename for a result: `mcq_test_result_<unix-ms>.csv`.
pub fn report_filename(result: &TestResult) -> String {
    format!("mcq_test_result_{}.csv", result.date.timestamp_millis())
}

/// Write the rendered report into `dir`, returning the file path.
pub fn write_report(result: &TestResult, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(report_filename(result));
    std::fs::write(&path, render_report(result))
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(path)
}

/// One parsed row of the detail table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub correct: bool,
}

/// Parse the detail table back out of a rendered report.
///
/// The inverse of [`render_report`]'s table section; exists so exports can
/// be verified to round-trip.
///
/// The reader is line-based: a field with an embedded newline is written
/// quoted (spreadsheets handle it), but on read its physical lines each
/// fail the four-field check and are skipped. The remaining rows still
/// parse.
pub fn read_detail_rows(report: &str) -> Vec<DetailRow> {
    let mut rows = Vec::new();
    let mut in_table = false;

    for line in report.lines() {
        if !in_table {
            in_table = line == DETAIL_HEADER;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_csv_line(line);
        if fields.len() != 4 {
            continue;
        }
        rows.push(DetailRow {
            question: fields[0].clone(),
            user_answer: fields[1].clone(),
            correct_answer: fields[2].clone(),
            correct: fields[3] == "Correct",
        });
    }

    rows
}

/// Split one CSV line, honoring double-quoted fields with doubled quotes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
