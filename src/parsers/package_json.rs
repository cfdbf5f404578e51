//! Package.json parsing functionality
//!
//! Only the two fields needed to build an alias are read: `name`, which
//! becomes the alias file name, and `main`, the entry file to forward to.

use crate::error::{Resolution, SkipReason};
use crate::models::package::{Candidate, PackageDescriptor, SELF_NAME};
use crate::output::logger::Logger;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// File name of the package metadata inside each package directory
pub const PACKAGE_JSON: &str = "package.json";

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse package.json content into a descriptor.
    ///
    /// `path` is only used to label a malformed file.
    pub fn parse(content: &str, path: &Path) -> Resolution<PackageDescriptor> {
        let json_value: Value =
            serde_json::from_str(content).map_err(|e| SkipReason::MalformedMetadata {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let obj = match json_value {
            Value::Object(obj) => obj,
            _ => {
                return Err(SkipReason::MalformedMetadata {
                    path: path.to_path_buf(),
                    message: "root value is not an object".to_string(),
                });
            }
        };

        let name = Self::extract_optional_string(&obj, "name");
        let main = Self::extract_optional_string(&obj, "main");

        let main_path = main.ok_or(SkipReason::MissingMain)?;

        match name {
            Some(name) if name == SELF_NAME => Err(SkipReason::SelfPackage),
            Some(name) if !name.is_empty() => Ok(PackageDescriptor { name, main_path }),
            _ => Err(SkipReason::MissingName),
        }
    }

    /// Read and parse the package.json of a package directory
    pub fn parse_dir(dir: &Path) -> Resolution<PackageDescriptor> {
        let path = dir.join(PACKAGE_JSON);
        let content = fs::read_to_string(&path).map_err(|_| SkipReason::NoMetadata)?;

        Self::parse(&content, &path)
    }

    /// Extract an optional string field from a JSON object
    fn extract_optional_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
        match obj.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Turns walker candidates into package descriptors, reporting anomalies
pub struct MetadataResolver {
    logger: Arc<Logger>,
}

impl MetadataResolver {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Resolve the descriptor of a candidate directory.
    ///
    /// A missing package.json is expected (tooling caches, stray folders) and
    /// stays silent; a malformed one is reported at warning level.
    pub fn resolve(&self, candidate: &Candidate) -> Resolution<PackageDescriptor> {
        if candidate.is_hidden() {
            return Err(SkipReason::Hidden);
        }

        let result = PackageJsonParser::parse_dir(&candidate.path());

        if let Err(reason @ SkipReason::MalformedMetadata { .. }) = &result {
            self.logger.warn(format!("unable to parse package definition: {}", reason));
        }

        result
    }
}
