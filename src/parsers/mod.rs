//! Parsing functionality for package files

pub mod package_json;

pub use package_json::{MetadataResolver, PackageJsonParser, PACKAGE_JSON};
