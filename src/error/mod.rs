//! Error handling for npmluau
//!
//! This module provides the error types, result aliases, skip reasons and
//! error context utilities used across the crate.

pub mod context;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{ErrorSeverity, NpmLuauError, Resolution, Result, SkipReason};
