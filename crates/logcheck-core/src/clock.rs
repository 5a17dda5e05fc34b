//! The clock context captured once per run.
//!
//! Both the normalizer (which needs the current year to complete
//! year-less syslog timestamps) and the evaluator (which needs "now")
//! read from the same [`Clock`] value, so all comparisons within a run
//! are internally consistent. The clock is never re-sampled mid-run.

use chrono::{Datelike, TimeZone, Utc};

/// An immutable reading of the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    /// Current time, seconds since the Unix epoch.
    pub now: i64,
    /// Current year, prepended to year-less log timestamps.
    pub year: i32,
}

impl Clock {
    /// Capture the system clock (UTC). Call exactly once, at startup.
    pub fn system() -> Self {
        let now = Utc::now();
        Self { now: now.timestamp(), year: now.year() }
    }

    /// A clock pinned to a given epoch instant; the year is derived from
    /// it. Intended for deterministic tests.
    pub fn fixed(now: i64) -> Self {
        let year = Utc
            .timestamp_opt(now, 0)
            .single()
            .map(|dt| dt.year())
            .unwrap_or(1970);
        Self { now, year }
    }
}
