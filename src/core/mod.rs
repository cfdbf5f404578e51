//! Core functionality for walking install directories and generating aliases

pub mod builder;
pub mod materializer;
pub mod parallel;
pub mod pruner;
pub mod walker;

pub use builder::{AliasBuilder, BuildOptions};
pub use materializer::{EntryPointMaterializer, RedirectStrategy};
pub use pruner::{config_file_filter, remove_files};
pub use walker::DirectoryWalker;
