//! npmluau - Luau require aliases for npm dependencies
//!
//! Walks a `node_modules` directory and writes, for every installed package,
//! a small Luau module in `node_modules/.luau-aliases` forwarding to the
//! package entry point.

pub mod cli;
pub mod codegen;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use codegen::{ReexportError, Reexporter, TypeReexporter};
pub use crate::core::{AliasBuilder, BuildOptions};
pub use error::{handle_error, ErrorSeverity, NpmLuauError, Resolution, Result, ResultExt, SkipReason};
pub use models::{
    config::Settings,
    package::{BuildReport, PackageDescriptor, ResolvedAlias},
};
pub use output::logger::{Level, Logger};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
