//! Shared test utilities for the logcheck integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file. Everything is deterministic: harnesses pin the clock with
//! [`fixtures::FIXED_NOW`] instead of sampling the wall clock.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
