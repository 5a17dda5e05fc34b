//! Normalizer — turns raw log lines into [`LogRecord`] values with a
//! single comparable epoch timestamp.
//!
//! Two timestamp encodings are supported, distinguished purely by the
//! first whitespace-delimited token:
//!
//! - **all-digit token**: already an epoch timestamp, used as-is;
//! - **anything else**: a syslog-style `month day time` prefix
//!   (`Jan  3 04:05:06`) with no year. The clock's year is prepended and
//!   the result parsed with the fixed layout `%Y %b %d %H:%M:%S`.
//!
//! Single-digit days arrive padded with an extra space between month and
//! day. The token split absorbs any amount of inter-field whitespace, and
//! the message is sliced from the original line after the last timestamp
//! token, so it is recovered exactly — no string substitution round trip.

use chrono::NaiveDateTime;
use tracing::trace;

use crate::clock::Clock;
use crate::error::NormalizeError;
use crate::types::LogRecord;

/// Parse layout for a month-format timestamp once the year is prepended.
const DATE_LAYOUT: &str = "%Y %b %d %H:%M:%S";

/// Number of leading tokens forming a month-format timestamp.
const MONTH_TOKENS: usize = 3;

/// Normalise an entire log file, preserving line order.
///
/// Blank lines are skipped; any other line that fails to normalise aborts
/// the whole run with the offending 1-based line number.
pub fn normalize(text: &str, clock: &Clock) -> Result<Vec<LogRecord>, NormalizeError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(normalize_line(line, idx + 1, clock)?);
    }
    trace!(records = records.len(), "normalized all lines");
    Ok(records)
}

/// Normalise one raw log line into a `(timestamp, message)` record.
pub fn normalize_line(
    line: &str,
    line_no: usize,
    clock: &Clock,
) -> Result<LogRecord, NormalizeError> {
    let first = line.split_whitespace().next().unwrap_or("");

    if !first.is_empty() && first.bytes().all(|b| b.is_ascii_digit()) {
        let (_, message) = split_off_tokens(line, 1);
        let ts = first.parse::<i64>().map_err(|_| NormalizeError::BadEpoch {
            line: line_no,
            token: first.to_string(),
        })?;
        return Ok(LogRecord { ts, message: message.to_string() });
    }

    let (tokens, message) = split_off_tokens(line, MONTH_TOKENS);
    let candidate = format!(
        "{} {} {} {}",
        clock.year, tokens[0], tokens[1], tokens[2]
    );
    let ts = NaiveDateTime::parse_from_str(&candidate, DATE_LAYOUT)
        .map_err(|source| NormalizeError::BadDate {
            line: line_no,
            date: candidate.clone(),
            source,
        })?
        .and_utc()
        .timestamp();
    trace!(line = line_no, ts, "completed year-less timestamp");
    Ok(LogRecord { ts, message: message.to_string() })
}

/// Split `count` whitespace-delimited tokens off the front of `line`,
/// returning the tokens and the remainder with leading whitespace trimmed.
///
/// Tokens past the end of the line come back empty; the caller's date
/// parse rejects those.
fn split_off_tokens(line: &str, count: usize) -> (Vec<&str>, &str) {
    let mut rest = line;
    let mut tokens = Vec::with_capacity(count);
    for _ in 0..count {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        rest = &rest[end..];
    }
    (tokens, rest.trim_start())
}
