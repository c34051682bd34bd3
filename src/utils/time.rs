//! Time utilities: timestamps for "now", duration formatting, display of
//! timestamps.

use chrono::{Duration, Local, NaiveDateTime};

/// Current local wall-clock time, without timezone.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// `HH:MM:SS` with hours running past 24 and a leading `-` for negative
/// spans. Sub-second precision is dropped.
pub fn format_elapsed(d: Duration) -> String {
    let sign = if d < Duration::zero() { "-" } else { "" };
    let secs = d.num_seconds().abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

/// ISO-8601 timestamp as shown by `show`.
pub fn format_stamp(t: NaiveDateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
