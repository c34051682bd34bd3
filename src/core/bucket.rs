//! Day bucketing: split sessions into per-calendar-day sub-intervals and
//! accumulate elapsed time over a date range.

use crate::models::{DayBucketMap, END_OF_DAY, Interval, START_OF_DAY, Session};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Split every session into per-day intervals.
///
/// Sessions are visited most recent first, so same-day lists hold the
/// newest interval first. An open session runs until `now`.
///
/// Days strictly between a session's first and last date are *replaced*
/// by a single full-day interval, discarding whatever an earlier-visited
/// session had put there.
pub fn bucketize(sessions: &[Session], now: NaiveDateTime) -> DayBucketMap {
    let mut map = DayBucketMap::new();

    for session in sessions.iter().rev() {
        let start = session.start();
        let end = session.end_or(now);
        let (s_date, e_date) = (start.date(), end.date());

        if s_date == e_date {
            push(&mut map, s_date, Interval::new(start.time(), end.time()));
            continue;
        }

        push(&mut map, s_date, Interval::new(start.time(), END_OF_DAY));

        // empty when end < start (clock moved backwards)
        let mut day = s_date.succ_opt();
        while let Some(d) = day.filter(|d| *d < e_date) {
            map.insert(d, vec![Interval::full_day()]);
            day = d.succ_opt();
        }

        push(&mut map, e_date, Interval::new(START_OF_DAY, end.time()));
    }

    map
}

fn push(map: &mut DayBucketMap, date: NaiveDate, iv: Interval) {
    map.entry(date).or_default().push(iv);
}

/// Total time on dates `>= since`.
///
/// Dates are walked newest first and the walk stops at the first date
/// before `since`; the early stop relies on that non-increasing order.
pub fn total_elapsed(sessions: &[Session], now: NaiveDateTime, since: NaiveDate) -> Duration {
    sum_since(&bucketize(sessions, now), since)
}

/// Same as [`total_elapsed`] on an already built map.
pub fn sum_since(map: &DayBucketMap, since: NaiveDate) -> Duration {
    let mut total = Duration::zero();
    for (date, intervals) in map.iter().rev() {
        if *date < since {
            break;
        }
        total += intervals.iter().map(Interval::span).sum::<Duration>();
    }
    total
}

/// Date range covering the `max_days` most recent populated dates.
///
/// Returns `None` when nothing has been recorded.
pub fn populated_range(map: &DayBucketMap, max_days: usize) -> Option<(NaiveDate, NaiveDate)> {
    let end = *map.keys().next_back()?;
    let start = map
        .keys()
        .rev()
        .take(max_days.max(1))
        .last()
        .copied()
        .unwrap_or(end);
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn dt(y: i32, m: u32, day: u32, h: u32, min: u32) -> NaiveDateTime {
        d(y, m, day).and_hms_opt(h, min, 0).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn closed(start: NaiveDateTime, end: NaiveDateTime) -> Session {
        Session::Closed { start, end }
    }

    #[test]
    fn multi_day_session_is_split_per_day() {
        let sessions = [closed(dt(2024, 1, 1, 10, 0), dt(2024, 1, 3, 14, 0))];
        let map = bucketize(&sessions, dt(2024, 6, 1, 0, 0));

        assert_eq!(map.len(), 3);
        assert_eq!(map[&d(2024, 1, 1)], vec![Interval::new(t(10, 0), END_OF_DAY)]);
        assert_eq!(map[&d(2024, 1, 2)], vec![Interval::full_day()]);
        assert_eq!(map[&d(2024, 1, 3)], vec![Interval::new(START_OF_DAY, t(14, 0))]);
    }

    #[test]
    fn same_day_session_gives_one_interval() {
        let sessions = [closed(dt(2024, 2, 5, 9, 0), dt(2024, 2, 5, 17, 30))];
        let map = bucketize(&sessions, dt(2024, 6, 1, 0, 0));

        assert_eq!(map.len(), 1);
        assert_eq!(map[&d(2024, 2, 5)], vec![Interval::new(t(9, 0), t(17, 30))]);
    }

    #[test]
    fn overnight_session_has_no_intervening_day() {
        let sessions = [closed(dt(2024, 1, 1, 22, 0), dt(2024, 1, 2, 2, 0))];
        let map = bucketize(&sessions, dt(2024, 6, 1, 0, 0));

        assert_eq!(map.len(), 2);
        assert_eq!(map[&d(2024, 1, 1)], vec![Interval::new(t(22, 0), END_OF_DAY)]);
        assert_eq!(map[&d(2024, 1, 2)], vec![Interval::new(START_OF_DAY, t(2, 0))]);
    }

    #[test]
    fn open_session_ends_now() {
        let sessions = [Session::Open {
            start: dt(2024, 3, 10, 8, 15),
        }];
        let map = bucketize(&sessions, dt(2024, 3, 10, 11, 45));
        assert_eq!(map[&d(2024, 3, 10)], vec![Interval::new(t(8, 15), t(11, 45))]);
    }

    #[test]
    fn same_day_lists_are_newest_first() {
        let sessions = [
            closed(dt(2024, 4, 2, 8, 0), dt(2024, 4, 2, 12, 0)),
            closed(dt(2024, 4, 2, 13, 0), dt(2024, 4, 2, 17, 0)),
        ];
        let map = bucketize(&sessions, dt(2024, 6, 1, 0, 0));
        assert_eq!(
            map[&d(2024, 4, 2)],
            vec![
                Interval::new(t(13, 0), t(17, 0)),
                Interval::new(t(8, 0), t(12, 0)),
            ]
        );
    }

    #[test]
    fn intervening_day_overwrites_earlier_entries() {
        // the newer session is visited first and lands on 01-02,
        // then the older multi-day one replaces that day wholesale
        let sessions = [
            closed(dt(2024, 1, 1, 10, 0), dt(2024, 1, 3, 9, 0)),
            closed(dt(2024, 1, 2, 12, 0), dt(2024, 1, 2, 13, 0)),
        ];
        let map = bucketize(&sessions, dt(2024, 6, 1, 0, 0));
        assert_eq!(map[&d(2024, 1, 2)], vec![Interval::full_day()]);
    }

    #[test]
    fn backwards_session_across_midnight() {
        let sessions = [closed(dt(2024, 1, 5, 1, 0), dt(2024, 1, 3, 23, 0))];
        let map = bucketize(&sessions, dt(2024, 6, 1, 0, 0));

        assert_eq!(map.len(), 2);
        assert_eq!(map[&d(2024, 1, 5)], vec![Interval::new(t(1, 0), END_OF_DAY)]);
        assert_eq!(map[&d(2024, 1, 3)], vec![Interval::new(START_OF_DAY, t(23, 0))]);
        assert!(!map.contains_key(&d(2024, 1, 4)));
    }

    #[test]
    fn total_stops_before_since() {
        let sessions = [closed(dt(2024, 1, 1, 10, 0), dt(2024, 1, 3, 14, 0))];
        let now = dt(2024, 6, 1, 0, 0);

        assert_eq!(total_elapsed(&sessions, now, d(2024, 1, 2)), Duration::hours(38));
        assert_eq!(total_elapsed(&sessions, now, d(2024, 1, 1)), Duration::hours(52));
        assert_eq!(total_elapsed(&sessions, now, d(2024, 1, 4)), Duration::zero());
    }

    #[test]
    fn total_across_several_sessions() {
        let sessions = [
            closed(dt(2024, 1, 1, 9, 0), dt(2024, 1, 1, 11, 0)),
            closed(dt(2024, 1, 5, 9, 0), dt(2024, 1, 5, 10, 30)),
            Session::Open {
                start: dt(2024, 1, 8, 14, 0),
            },
        ];
        let now = dt(2024, 1, 8, 15, 0);

        assert_eq!(total_elapsed(&sessions, now, d(2024, 1, 2)), Duration::minutes(150));
        assert_eq!(total_elapsed(&sessions, now, d(2023, 12, 31)), Duration::minutes(270));
    }

    #[test]
    fn populated_range_picks_recent_days() {
        let sessions: Vec<Session> = (1..=10)
            .map(|day| closed(dt(2024, 7, day, 9, 0), dt(2024, 7, day, 10, 0)))
            .collect();
        let map = bucketize(&sessions, dt(2024, 8, 1, 0, 0));

        assert_eq!(populated_range(&map, 7), Some((d(2024, 7, 4), d(2024, 7, 10))));
        assert_eq!(populated_range(&map, 30), Some((d(2024, 7, 1), d(2024, 7, 10))));
        assert_eq!(populated_range(&DayBucketMap::new(), 7), None);
    }
}
