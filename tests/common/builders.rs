//! Test builders — on-disk log fixtures and record constructors.
//!
//! These panic on invalid input rather than returning `Result`; they are
//! for readability in assertions, not production use.

use std::io::Write;

use logcheck::LogRecord;
use tempfile::NamedTempFile;

/// Construct a [`LogRecord`] directly, bypassing the normalizer.
pub fn record(ts: i64, message: &str) -> LogRecord {
    LogRecord { ts, message: message.to_string() }
}

/// Write `lines` to a fresh temp file, one per line with a trailing
/// newline, and return the handle (the file is deleted on drop).
pub fn write_log(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp log file");
    for line in lines {
        writeln!(file, "{line}").expect("write temp log line");
    }
    file.flush().expect("flush temp log file");
    file
}
