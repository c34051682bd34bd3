//! Terminal timeline: one row per day, a 24h bar of half-hour cells and the
//! recorded intervals next to it.

use crate::errors::{AppError, AppResult};
use crate::models::{DayBucketMap, END_OF_DAY, Interval, START_OF_DAY};
use crate::utils::date::days_between;
use crate::utils::formatting::{pad_right, title_case};
use chrono::NaiveDate;
use std::fmt::{self, Write};

pub const CELLS_PER_DAY: usize = 48;
const CELL_SECS: i64 = 86_400 / CELLS_PER_DAY as i64;
const RULER_EVERY: usize = 6;

const FILLED: char = '█';
const EMPTY: char = '·';

pub struct PlotOptions<'a> {
    pub time_format: &'a str,
    pub date_format: &'a str,
    /// Leave out dates with nothing recorded.
    pub skip_empty: bool,
}

/// Render `start..=end` of `map` as text. Reversed bounds are swapped.
pub fn render_timeline(
    name: &str,
    map: &DayBucketMap,
    start: NaiveDate,
    end: NaiveDate,
    opts: &PlotOptions<'_>,
) -> AppResult<String> {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let mut rows = Vec::new();
    for date in days_between(start, end) {
        let intervals = map.get(&date).map(Vec::as_slice).unwrap_or_default();
        if intervals.is_empty() && opts.skip_empty {
            continue;
        }

        let label = checked(date.format(opts.date_format), opts.date_format)?;
        let mut spans = Vec::with_capacity(intervals.len());
        for iv in intervals {
            spans.push(format!(
                "{} - {}",
                checked(iv.start.format(opts.time_format), opts.time_format)?,
                checked(iv.end.format(opts.time_format), opts.time_format)?
            ));
        }
        rows.push((label, bar(intervals), spans.join(", ")));
    }

    let label_w = rows
        .iter()
        .map(|(label, _, _)| unicode_width::UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} Punchclock {} - {}",
        title_case(name),
        checked(start.format(opts.date_format), opts.date_format)?,
        checked(end.format(opts.date_format), opts.date_format)?
    );
    let _ = writeln!(out, "{} {}", " ".repeat(label_w), ruler());
    for (label, bar, spans) in rows {
        let line = format!("{} │{}│ {}", pad_right(&label, label_w), bar, spans);
        let _ = writeln!(out, "{}", line.trim_end());
    }
    Ok(out)
}

/// Half-hour cells touched by any of `intervals`.
pub fn bar(intervals: &[Interval]) -> String {
    let mut cells = [false; CELLS_PER_DAY];

    for iv in intervals {
        let (mut from, mut to) = (secs(iv.start, false), secs(iv.end, true));
        if to < from {
            std::mem::swap(&mut from, &mut to);
        }
        // a zero-length interval still marks its cell
        let first = (from / CELL_SECS) as usize;
        let last = if to > from { ((to - 1) / CELL_SECS) as usize } else { first };
        for cell in cells.iter_mut().take(last.min(CELLS_PER_DAY - 1) + 1).skip(first) {
            *cell = true;
        }
    }

    cells.iter().map(|c| if *c { FILLED } else { EMPTY }).collect()
}

/// Hour labels above the bar, one every three hours.
fn ruler() -> String {
    let mut line = String::new();
    for h in (0..24).step_by(RULER_EVERY / 2) {
        let _ = write!(line, "{:<width$}", format!("{:02}", h), width = RULER_EVERY);
    }
    format!(" {}", line.trim_end())
}

/// Seconds since midnight; `END_OF_DAY` closes the day when used as an end.
fn secs(t: chrono::NaiveTime, is_end: bool) -> i64 {
    if is_end && t == END_OF_DAY {
        86_400
    } else {
        (t - START_OF_DAY).num_seconds()
    }
}

/// Format through `Display` so a bad strftime pattern from the config
/// becomes an error instead of a panic.
fn checked(v: impl fmt::Display, pattern: &str) -> AppResult<String> {
    let mut s = String::new();
    write!(s, "{v}")
        .map_err(|_| AppError::Config(format!("invalid date/time format \"{pattern}\"")))?;
    Ok(s)
}
