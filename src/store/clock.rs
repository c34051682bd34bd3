//! Clock-in / clock-out state machine.
//!
//! Only the last session of a timer takes part:
//! `in` moves `NoSessions | Closed -> Open` by appending a session,
//! `out` moves `Open -> Closed` in place. Anything else is a
//! [`AppError::StateConflict`] and leaves the record untouched.

use super::TimerStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Session, Timer, TimerState};
use chrono::{Duration, NaiveDateTime};

pub const MSG_ALREADY_IN: &str = "You need to clock out before you clock back in";
pub const MSG_NOT_IN: &str = "You need to clock in before you clock back out";
pub const MSG_NO_SESSIONS: &str = "No sessions recorded yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockIn {
    /// The timer did not exist and was created, clocked in.
    Created,
    /// The timer did not exist and the user declined to create it.
    Declined,
    /// A new session was opened on an existing timer.
    ClockedIn,
}

/// Read-only view of a timer's last session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession {
    pub start: NaiveDateTime,
    /// `None` while still clocked in.
    pub end: Option<NaiveDateTime>,
    pub elapsed: Duration,
}

impl TimerStore {
    /// Clock into `name` at `now`.
    ///
    /// A missing timer is only created when `confirm` agrees to it.
    pub fn clock_in<F>(&self, name: &str, now: NaiveDateTime, confirm: F) -> AppResult<ClockIn>
    where
        F: FnOnce(&str) -> bool,
    {
        if !self.exists(name)? {
            let prompt = format!(
                "{name} does not exist. Do you want to create a new clock with that name?"
            );
            if !confirm(&prompt) {
                return Ok(ClockIn::Declined);
            }
            self.save(name, &Timer::started_at(now))?;
            return Ok(ClockIn::Created);
        }

        let mut timer = self.load(name)?;
        if timer.state() == TimerState::Open {
            return Err(AppError::StateConflict(MSG_ALREADY_IN.into()));
        }

        timer.sessions.push(Session::Open { start: now });
        self.save(name, &timer)?;
        Ok(ClockIn::ClockedIn)
    }

    /// Clock out of `name` at `now`, returning the session just closed.
    pub fn clock_out(&self, name: &str, now: NaiveDateTime) -> AppResult<Session> {
        let mut timer = self.load(name)?;

        let Some(last) = timer.sessions.last_mut().filter(|s| s.is_open()) else {
            return Err(AppError::StateConflict(MSG_NOT_IN.into()));
        };
        *last = last.close(now);
        let closed = *last;

        self.save(name, &timer)?;
        Ok(closed)
    }

    /// Describe the last session of `name` without touching the record.
    pub fn show_current(&self, name: &str, now: NaiveDateTime) -> AppResult<CurrentSession> {
        let timer = self.load(name)?;
        let last = timer
            .last()
            .ok_or_else(|| AppError::StateConflict(MSG_NO_SESSIONS.into()))?;

        Ok(CurrentSession {
            start: last.start(),
            end: last.end(),
            elapsed: last.elapsed(now),
        })
    }
}
