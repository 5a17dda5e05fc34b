//! Evaluator — decides overall health from the ordered record sequence
//! and the captured clock.
//!
//! Rule precedence:
//! 1. Staleness of the *last* record dominates; if it triggers, message
//!    content is never scanned.
//! 2. Otherwise every record within the scan window is checked in file
//!    order, and the first match wins. `WARNING` is tested before `ERROR`
//!    on each line, so a line containing both reports WARNING.

use tracing::debug;

use crate::clock::Clock;
use crate::types::{LogRecord, Status};

/// A file whose last entry is at least this old is stale.
pub const STALE_AFTER_SECS: i64 = 3600;

/// Only entries younger than this are scanned for severity tokens.
pub const SCAN_WINDOW_SECS: i64 = 600;

/// Evaluate the normalised records against `clock.now`.
pub fn evaluate(records: &[LogRecord], clock: &Clock) -> Status {
    let Some(last) = records.last() else {
        return Status::warning("Log file contains no entries");
    };

    if clock.now - last.ts >= STALE_AFTER_SECS {
        debug!(last_ts = last.ts, now = clock.now, "log file is stale");
        return Status::warning("There has been no log entries during the last hour");
    }

    let cutoff = clock.now - SCAN_WINDOW_SECS;
    for record in records {
        if record.ts <= cutoff {
            continue;
        }
        if record.message.contains("WARNING") {
            return Status::warning("Warning message found within last 10 minutes");
        }
        if record.message.contains("ERROR") {
            return Status::critical("ERROR message found within last 10 minutes");
        }
    }

    Status::ok("No warning or error entries within the last 10 minutes")
}
