//! Package-related data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SkipReason;

/// Name npmluau is published under; a package with this name is never aliased
pub const SELF_NAME: &str = "npmluau";

/// Depth of a candidate relative to the install directory.
///
/// Top-level packages sit at level 1, packages inside a scope namespace at
/// level 2. The level is also the number of `../` steps needed to climb from
/// the alias file back to the install directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NestingLevel(u8);

impl NestingLevel {
    pub const TOP: NestingLevel = NestingLevel(1);
    pub const SCOPED: NestingLevel = NestingLevel(2);

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Level of the children of an entry at this level
    pub fn deeper(&self) -> NestingLevel {
        NestingLevel(self.0 + 1)
    }
}

/// A directory found while walking the install directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    pub parent: PathBuf,
    pub name: String,
    pub level: NestingLevel,
}

impl Candidate {
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<String>, level: NestingLevel) -> Self {
        Self {
            parent: parent.into(),
            name: name.into(),
            level,
        }
    }

    /// Full path of the candidate directory
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

/// `name` and `main` of a package, read from its `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub main_path: String,
}

/// Final unit of work: the alias file name and its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAlias {
    pub name: String,
    pub redirect_source: String,
}

impl ResolvedAlias {
    /// Location of the alias file for this package under `output`
    pub fn file_path(&self, output: &Path, extension: &str) -> PathBuf {
        output.join(format!("{}.{}", self.name, extension))
    }
}

/// Outcome of a whole alias build
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Names of the aliases that were resolved
    pub resolved: Vec<String>,
    /// Candidates that did not produce an alias
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// Names whose alias file could not be written
    pub failed_writes: Vec<String>,
}

impl BuildReport {
    /// Number of alias files that ended up on disk
    pub fn written_count(&self) -> usize {
        self.resolved.len() - self.failed_writes.len()
    }

    /// Skip reason recorded for a candidate directory, if any
    pub fn skip_reason(&self, candidate: &Path) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|(path, _)| path == candidate)
            .map(|(_, reason)| reason)
    }
}

/// Whether an entry name marks a hidden directory such as `.bin` or `.cache`
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Whether an entry name marks a scope namespace such as `@org`
pub fn is_scope_name(name: &str) -> bool {
    name.starts_with('@')
}
