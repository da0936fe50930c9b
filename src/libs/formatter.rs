//! Date, time and percentage formatting for display and export.
//!
//! Due timestamps are handled at minute precision everywhere: users enter
//! them as `YYYY-MM-DD HH:MM`, tables print them that way, and CSV/JSON/Excel
//! exports use the same representation so that exported files can be parsed
//! back with [`parse_due`].
//!
//! ```rust
//! use grind::libs::formatter::{format_due, parse_due, format_percent};
//!
//! let due = parse_due("2024-01-01 10:00").unwrap();
//! assert_eq!(format_due(&due), "2024-01-01 10:00");
//! assert_eq!(format_percent(66.666), "66.7%");
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical representation of a due timestamp.
pub const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Representation used for creation and chat timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a due timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_due(due: &NaiveDateTime) -> String {
    due.format(DUE_FORMAT).to_string()
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a user-supplied due timestamp.
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM`, an optional `:SS`
/// suffix on either, and a bare `YYYY-MM-DD`, which means the end of that
/// day (23:59). Returns `None` for anything else.
pub fn parse_due(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    for format in [DUE_FORMAT, "%Y-%m-%dT%H:%M", TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(due) = NaiveDateTime::parse_from_str(value, format) {
            return Some(due);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| NaiveTime::from_hms_opt(23, 59, 0).map(|time| date.and_time(time)))
}

/// Formats a percentage with one decimal place, e.g. `80.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Formats a percentage delta with an explicit sign, e.g. `+12.5%`.
pub fn format_signed_percent(value: f64) -> String {
    format!("{:+.1}%", value)
}
