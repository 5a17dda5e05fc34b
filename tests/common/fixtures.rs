//! Clock and corpus fixtures shared across harnesses.

use chrono::{TimeZone, Utc};
use logcheck::Clock;

/// The instant "now" used by every deterministic harness clock:
/// 2023-11-14T22:13:20Z.
pub const FIXED_NOW: i64 = 1_700_000_000;

/// A clock pinned to [`FIXED_NOW`] (year 2023).
pub fn fixed_clock() -> Clock {
    Clock::fixed(FIXED_NOW)
}

/// An epoch-format log line `age_secs` before [`FIXED_NOW`].
pub fn epoch_line(age_secs: i64, message: &str) -> String {
    format!("{} {}", FIXED_NOW - age_secs, message)
}

/// A syslog-style `month day time` line for the given epoch instant.
///
/// Uses `%e` for the day, so single-digit days come out space-padded
/// (`Nov  3`) exactly as syslog writes them. Only valid for instants in
/// the same year as the harness clock.
pub fn month_line(ts: i64, message: &str) -> String {
    let dt = Utc
        .timestamp_opt(ts, 0)
        .single()
        .expect("fixture timestamp in range");
    format!("{} {}", dt.format("%b %e %H:%M:%S"), message)
}

/// The epoch value the normalizer should produce for a `month day time`
/// prefix under the harness clock's year.
pub fn month_epoch(month: u32, day: u32, h: u32, m: u32, s: u32) -> i64 {
    Utc.with_ymd_and_hms(2023, month, day, h, m, s)
        .single()
        .expect("fixture date valid")
        .timestamp()
}
