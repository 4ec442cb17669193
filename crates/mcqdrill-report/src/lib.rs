//! mcqdrill-report — Human-readable CSV export of test results.

pub mod csv;

pub use csv::{
    read_detail_rows, render_report, report_filename, write_report, DetailRow, UNANSWERED,
};
