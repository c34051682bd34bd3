use super::session::Session;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Phase of a timer, decided by its last session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    NoSessions,
    Open,
    Closed,
}

/// A named, independently persisted sequence of sessions.
/// Every session but the last is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub sessions: Vec<Session>,
}

impl Timer {
    /// A fresh timer, clocked in at `start`.
    pub fn started_at(start: NaiveDateTime) -> Self {
        Self {
            sessions: vec![Session::Open { start }],
        }
    }

    pub fn last(&self) -> Option<&Session> {
        self.sessions.last()
    }

    pub fn state(&self) -> TimerState {
        match self.last() {
            None => TimerState::NoSessions,
            Some(s) if s.is_open() => TimerState::Open,
            Some(_) => TimerState::Closed,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == TimerState::Open
    }

    /// Returns the position of the first session other than the last that
    /// is still open, if any.
    pub fn find_dangling_open(&self) -> Option<usize> {
        let n = self.sessions.len();
        self.sessions
            .iter()
            .take(n.saturating_sub(1))
            .position(Session::is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn state_follows_last_session() {
        let mut t = Timer::default();
        assert_eq!(t.state(), TimerState::NoSessions);

        t = Timer::started_at(day(1));
        assert_eq!(t.state(), TimerState::Open);
        assert!(t.is_running());

        t.sessions[0] = t.sessions[0].close(day(2));
        assert_eq!(t.state(), TimerState::Closed);
    }

    #[test]
    fn dangling_open_detected() {
        let t = Timer {
            sessions: vec![Session::Open { start: day(1) }, Session::Open { start: day(2) }],
        };
        assert_eq!(t.find_dangling_open(), Some(0));
        assert_eq!(Timer::started_at(day(3)).find_dangling_open(), None);
    }
}
