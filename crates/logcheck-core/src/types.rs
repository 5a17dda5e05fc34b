//! Core types shared across the check pipeline: the normalised
//! [`LogRecord`], the [`Severity`] scale, and the final [`Status`].

/// A single normalised log entry.
///
/// Produced by the normalizer from one raw line; immutable once created.
/// The record sequence preserves the original file's line order — the
/// evaluator relies on the *last* record being the most recent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Absolute timestamp in seconds since the Unix epoch.
    pub ts: i64,
    /// Everything after the timestamp portion of the line, leading
    /// whitespace trimmed, otherwise verbatim.
    pub message: String,
}

/// Check severity, in the monitoring-system convention.
///
/// Variants are ordered so that `Ok < Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// The process exit code the monitoring system expects for this level.
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// The final verdict of a check run.
///
/// Renders as the single `<LEVEL> - <description>` line the monitoring
/// system parses from stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub severity: Severity,
    pub message: String,
}

impl Status {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { severity: Severity::Ok, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self { severity: Severity::Critical, message: message.into() }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.severity, self.message)
    }
}
