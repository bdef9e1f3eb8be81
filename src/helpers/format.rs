//! Format - Cell Display Formatting
//!
//! Formatters never parse or validate their input: the raw text is kept
//! verbatim and only decorated, so malformed values pass through unchanged.

use chrono::DateTime;

use crate::constants::INVALID_DATE;

/// Largest instant distance from the epoch, in milliseconds, that a date
/// is rendered for (100,000,000 days either way)
const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// Long en-GB date-time pattern, e.g. "Thursday 1 January 1970 at 00:00:00"
const LONG_DATE_TIME: &str = "%A %-d %B %Y at %H:%M:%S";

/// Format a value as a Euro amount
pub fn format_currency(value: &str) -> String {
    format!("{value} €")
}

/// Format a value as a percentage
pub fn format_percentage(value: &str) -> String {
    format!("{value} %")
}

/// Format a value as a unit count
pub fn format_units(value: &str) -> String {
    format!("{value} units")
}

/// Format epoch milliseconds as a long UTC date-time
pub fn format_epoch_millis(millis: i64) -> String {
    if millis.unsigned_abs() > MAX_EPOCH_MILLIS.unsigned_abs() {
        return INVALID_DATE.to_string();
    }
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format(LONG_DATE_TIME).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format raw text holding epoch milliseconds
///
/// Non-integer text renders as "Invalid Date".
pub fn format_epoch_millis_text(value: &str) -> String {
    value
        .trim()
        .parse::<i64>()
        .map(format_epoch_millis)
        .unwrap_or_else(|_| INVALID_DATE.to_string())
}

/// Timestamp suffix used for export file names
pub fn format_file_stamp(dt: &DateTime<chrono::Local>) -> String {
    dt.format("%Y%m%d-%H%M%S%.3f").to_string()
}
