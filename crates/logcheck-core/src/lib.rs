//! logcheck-core — timestamp normalization and evaluation for logcheck.
//!
//! This crate holds everything with real logic; the binary at the workspace
//! root is a thin CLI wrapper around it.
//!
//! # Architecture
//!
//! ```text
//! raw lines ──► Normalizer ──► [LogRecord] ──► Evaluator ──► Status
//!                    ▲                             ▲
//!                    └───────── Clock ─────────────┘
//! ```
//!
//! The [`Clock`] is captured once at process start and passed by reference
//! into both stages, so every comparison within a run uses the same instant.

pub mod clock;
pub mod error;
pub mod evaluator;
pub mod normalizer;
pub mod types;

pub use clock::Clock;
pub use error::{CheckError, NormalizeError};
pub use types::{LogRecord, Severity, Status};
