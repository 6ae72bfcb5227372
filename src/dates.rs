use time::{
    format_description::BorrowedFormatItem,
    macros::{format_description, time},
    Date, PrimitiveDateTime,
};

use crate::error::AppError;

const DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATETIME_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATETIME_MINUTES: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Parses a `YYYY-MM-DD` calendar date. Surrounding whitespace is trimmed.
/// Month and day must be two digits, so `2024-1-5` is rejected.
pub fn parse_date(raw: &str) -> Result<Date, AppError> {
    Date::parse(raw.trim(), DATE)
        .map_err(|_| AppError::Validation(format!("Invalid date format: {raw}")))
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM` and `YYYY-MM-DD`, tried in
/// that order. A bare date means midnight. Surrounding whitespace is trimmed, and
/// every field after the year must be two digits (`2024-1-5 8:30` is rejected).
pub fn parse_timestamp(raw: &str) -> Result<PrimitiveDateTime, AppError> {
    let s = raw.trim();
    PrimitiveDateTime::parse(s, DATETIME_SECONDS)
        .or_else(|_| PrimitiveDateTime::parse(s, DATETIME_MINUTES))
        .or_else(|_| Date::parse(s, DATE).map(Date::midnight))
        .map_err(|_| AppError::Validation(format!("Invalid date format: {raw}")))
}

/// Inclusive bounds `[day 00:00:00, day 23:59:59]`.
pub fn day_bounds(day: Date) -> (PrimitiveDateTime, PrimitiveDateTime) {
    (day.midnight(), day.with_time(time!(23:59:59)))
}

pub fn format_date(d: Date) -> String {
    d.format(DATE).unwrap_or_else(|_| d.to_string())
}

pub fn format_timestamp(ts: PrimitiveDateTime) -> String {
    ts.format(DATETIME_SECONDS).unwrap_or_else(|_| ts.to_string())
}
