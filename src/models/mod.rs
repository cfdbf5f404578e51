//! Data models and structures for npmluau

pub mod config;
pub mod package;

pub use config::{PartialSettings, Settings};
pub use package::{BuildReport, Candidate, NestingLevel, PackageDescriptor, ResolvedAlias};
