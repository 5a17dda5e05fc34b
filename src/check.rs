//! The check runner: file → normalize → evaluate → [`Status`].
//!
//! Also home to the single error-to-status mapping the binary applies at
//! the top level; nothing below this layer exits the process.

use std::fs;
use std::path::Path;

use logcheck_core::{evaluator, normalizer, CheckError, Clock, Status};
use tracing::debug;

/// Run the full health check against one log file.
///
/// The entire file is read eagerly before evaluation; intended inputs are
/// bounded-size rotated log files.
pub fn check_file(path: &Path, clock: &Clock) -> Result<Status, CheckError> {
    if !path.exists() {
        return Err(CheckError::FileNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = normalizer::normalize(&text, clock)?;
    debug!(path = %path.display(), records = records.len(), "normalized log file");

    Ok(evaluator::evaluate(&records, clock))
}

/// Map a failed run to the status line and severity the monitoring
/// system should see.
pub fn status_for_error(err: &CheckError) -> Status {
    match err {
        CheckError::FileNotFound(_) => Status::critical("Log file does not exist"),
        CheckError::Io { .. } => Status::critical(format!("Cannot read log file: {err}")),
        // Normalization failures deliberately stay at WARNING; see DESIGN.md.
        CheckError::Normalize(_) => Status::warning(format!("Cannot normalize log file: {err}")),
    }
}
