//! Shared helpers

pub mod path_resolver;

pub use path_resolver::{module_identifier, normalize_segments, relative_reference};
