use chrono::{Duration, NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// First instant of a calendar day.
pub const START_OF_DAY: NaiveTime = NaiveTime::MIN;

/// Last representable microsecond of a calendar day.
pub const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999) {
    Some(t) => t,
    None => unreachable!(),
};

/// A time-of-day sub-interval on a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Interval {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn full_day() -> Self {
        Self::new(START_OF_DAY, END_OF_DAY)
    }

    /// Covered time. An interval ending at `END_OF_DAY` runs up to the
    /// following midnight, so a full day is exactly 24h.
    pub fn span(&self) -> Duration {
        let end = if self.end == END_OF_DAY {
            Duration::days(1)
        } else {
            self.end - START_OF_DAY
        };
        end - (self.start - START_OF_DAY)
    }
}

/// Calendar date -> sub-intervals on that date, in bucketization order.
/// Built fresh for each query, never persisted.
pub type DayBucketMap = BTreeMap<NaiveDate, Vec<Interval>>;
