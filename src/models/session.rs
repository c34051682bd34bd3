use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One clock-in/clock-out pair, or an unterminated clock-in.
///
/// On disk a session is a list of one (open) or two (closed) timestamps;
/// any other length is rejected when the record is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NaiveDateTime>", into = "Vec<NaiveDateTime>")]
pub enum Session {
    Open {
        start: NaiveDateTime,
    },
    Closed {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Session {
    pub fn start(&self) -> NaiveDateTime {
        match self {
            Session::Open { start } | Session::Closed { start, .. } => *start,
        }
    }

    /// End timestamp, or `None` while still clocked in.
    pub fn end(&self) -> Option<NaiveDateTime> {
        match self {
            Session::Open { .. } => None,
            Session::Closed { end, .. } => Some(*end),
        }
    }

    /// End timestamp with an open session running until `now`.
    pub fn end_or(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.end().unwrap_or(now)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Session::Open { .. })
    }

    /// Elapsed time; negative when the clock was moved backwards.
    pub fn elapsed(&self, now: NaiveDateTime) -> Duration {
        self.end_or(now) - self.start()
    }

    /// Close an open session. A closed session is returned unchanged.
    pub fn close(self, end: NaiveDateTime) -> Self {
        match self {
            Session::Open { start } => Session::Closed { start, end },
            closed @ Session::Closed { .. } => closed,
        }
    }
}

impl TryFrom<Vec<NaiveDateTime>> for Session {
    type Error = String;

    fn try_from(stamps: Vec<NaiveDateTime>) -> Result<Self, Self::Error> {
        match stamps.as_slice() {
            [start] => Ok(Session::Open { start: *start }),
            [start, end] => Ok(Session::Closed {
                start: *start,
                end: *end,
            }),
            other => Err(format!(
                "session holds {} timestamps, expected 1 or 2",
                other.len()
            )),
        }
    }
}

impl From<Session> for Vec<NaiveDateTime> {
    fn from(s: Session) -> Self {
        match s {
            Session::Open { start } => vec![start],
            Session::Closed { start, end } => vec![start, end],
        }
    }
}
