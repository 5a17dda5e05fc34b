//! Error types for the check pipeline.
//!
//! Every error here is terminal for the run: nothing is retried and no
//! line is silently skipped. The binary maps each variant to a status
//! line and exit code in one place (the root crate's `check` module), so
//! no conversion function terminates the process itself.

use std::path::PathBuf;
use thiserror::Error;

/// A log line whose timestamp could not be normalised.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The first token was all-digit but does not fit in an `i64`.
    #[error("line {line}: numeric timestamp {token:?} is out of range")]
    BadEpoch { line: usize, token: String },

    /// The `month day time` prefix did not parse as a real date.
    #[error("line {line}: cannot parse date {date:?}: {source}")]
    BadDate {
        line: usize,
        date: String,
        source: chrono::format::ParseError,
    },
}

/// Failure of a whole check run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("log file {0:?} does not exist")]
    FileNotFound(PathBuf),

    #[error("cannot read log file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
