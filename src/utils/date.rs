use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DEFAULT_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date argument in the configured input format.
pub fn parse_date(s: &str, format: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), format).map_err(|_| {
        AppError::InvalidDate(format!("\"{s}\" (expected format {format})"))
    })
}

/// Every date from `start` to `end`, both included. The bounds are
/// swapped when given in reverse.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    start.iter_days().take_while(|d| *d <= end).collect()
}
