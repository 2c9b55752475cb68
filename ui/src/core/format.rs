//! Formatting helpers for presenting scores and report dates.

use time::{macros::format_description, Date, OffsetDateTime};

/// Percentage label for a 0–10 score (`7` → `"70%"`).
pub fn format_percent(score: i32) -> String {
    format!("{}%", i64::from(score) * 10)
}

/// Long en-US date, e.g. `October 16, 2026`.
pub fn format_report_date(date: Date) -> String {
    date.format(&format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Today's date in the local offset, falling back to UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
