//! logcheck — Sensu-compatible log freshness and severity check.
//!
//! Inspects a single log file and reports its health as one
//! `<LEVEL> - <description>` line on stdout plus an exit code
//! (0 = OK, 1 = WARNING, 2 = CRITICAL).
//!
//! # Architecture
//!
//! ```text
//! CLI ──► check::check_file ──► Normalizer ──► Evaluator ──► Status
//! ```
//!
//! The binary stays thin: everything observable is reachable through
//! [`check::check_file`] with an injected [`Clock`], which is what the
//! integration harnesses drive.

pub mod check;

pub use logcheck_core::{CheckError, Clock, LogRecord, NormalizeError, Severity, Status};
