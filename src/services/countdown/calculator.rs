//! Pure countdown arithmetic.
//!
//! `compute` maps a (target, now) pair of instants to a days/hours/minutes/
//! seconds breakdown. Keeping it free of any clock or timer makes the whole
//! refresh loop testable against fixed instants.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Raised when a target instant cannot be understood. Callers are expected
/// to surface this explicitly rather than silently rendering 00:00:00:00.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid target instant: {raw:?}")]
    Invalid { raw: String },
}

/// Remaining time decomposed for display.
///
/// Invariants: `hours` in 0..=23, `minutes` and `seconds` in 0..=59, `days`
/// unbounded and non-negative. An expired breakdown is all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub expired: bool,
}

impl TimeBreakdown {
    /// The all-zero, expired breakdown.
    pub const fn expired() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            expired: true,
        }
    }

    /// Two-digit zero-padded rendering of each field, days included.
    /// A 100+ day countdown simply grows past two digits.
    pub fn padded_days(&self) -> String {
        format!("{:02}", self.days)
    }

    pub fn padded_hours(&self) -> String {
        format!("{:02}", self.hours)
    }

    pub fn padded_minutes(&self) -> String {
        format!("{:02}", self.minutes)
    }

    pub fn padded_seconds(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

impl fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Compute the remaining time between `now` and `target`.
///
/// Pure and deterministic: identical inputs always yield identical output.
/// A target at or before `now` is expired.
pub fn compute(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeBreakdown {
    let total_ms = target.signed_duration_since(now).num_milliseconds();

    if total_ms <= 0 {
        return TimeBreakdown::expired();
    }

    TimeBreakdown {
        days: total_ms / MS_PER_DAY,
        hours: ((total_ms / MS_PER_HOUR) % 24) as u32,
        minutes: ((total_ms / MS_PER_MINUTE) % 60) as u32,
        seconds: ((total_ms / MS_PER_SECOND) % 60) as u32,
        expired: false,
    }
}

/// Parse an RFC 3339 / ISO-8601 timestamp into a target instant.
///
/// Unparsable input is reported as [`TargetError::Invalid`] so the caller can
/// distinguish "expired" from "broken".
pub fn parse_target(raw: &str) -> Result<DateTime<Utc>, TargetError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TargetError::Invalid {
            raw: raw.to_string(),
        })
}
