//! Luau re-export code generation
//!
//! The alias builder does not care how a redirect module is produced for a
//! Luau entry file, only that something turns `(require path, source)` into
//! the new module text or fails. [`Reexporter`] is that seam; [`TypeReexporter`]
//! is the implementation used by the command line tool.

pub mod reexport;

use thiserror::Error;

pub use reexport::TypeReexporter;

/// Failure to produce a redirect module
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReexportError {
    /// The original source is not valid Luau
    #[error("unable to parse code: {0}")]
    Parse(String),

    /// The redirect module could not be produced
    #[error("unable to generate code: {0}")]
    Generate(String),
}

/// Produces a module that forwards to `module_path` while keeping the
/// exported types of `code` reachable
pub trait Reexporter: Send + Sync {
    fn reexport(&self, module_path: &str, code: &str) -> Result<String, ReexportError>;
}

impl<F> Reexporter for F
where
    F: Fn(&str, &str) -> Result<String, ReexportError> + Send + Sync,
{
    fn reexport(&self, module_path: &str, code: &str) -> Result<String, ReexportError> {
        self(module_path, code)
    }
}
