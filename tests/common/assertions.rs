//! Domain-specific assertion macros for the logcheck harnesses.
//!
//! These add context-rich failure messages that show the full rendered
//! status line when a severity or description expectation is violated.

/// Assert that a [`logcheck::Status`] has the expected severity, and
/// optionally that its description contains a substring.
///
/// ```rust
/// assert_status!(status, Severity::Warning);
/// assert_status!(status, Severity::Warning, "no log entries");
/// ```
#[macro_export]
macro_rules! assert_status {
    ($status:expr, $severity:expr) => {{
        let status: &logcheck::Status = &$status;
        let expected: logcheck::Severity = $severity;
        if status.severity != expected {
            panic!(
                "assert_status! failed:\n  expected severity: {:?}\n  actual status:     {}",
                expected, status
            );
        }
    }};
    ($status:expr, $severity:expr, $substr:expr) => {{
        let status: &logcheck::Status = &$status;
        let expected: logcheck::Severity = $severity;
        let substr: &str = $substr;
        if status.severity != expected {
            panic!(
                "assert_status! failed:\n  expected severity: {:?}\n  actual status:     {}",
                expected, status
            );
        }
        if !status.message.contains(substr) {
            panic!(
                "assert_status! failed: description does not contain {:?}\n  actual status: {}",
                substr, status
            );
        }
    }};
}
