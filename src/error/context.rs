//! Error context utilities for npmluau

use crate::error::{ErrorSeverity, NpmLuauError, Result};
use crate::output::logger::Logger;
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| NpmLuauError::Config {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let err: &(dyn std::error::Error + 'static) = &err;
            if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
                if io_err.kind() == std::io::ErrorKind::NotFound {
                    return NpmLuauError::InstallDirNotFound {
                        path: path.as_ref().to_path_buf(),
                    };
                }
            }

            NpmLuauError::directory_traversal_error(path.as_ref(), err.to_string())
        })
    }
}

/// Report a recoverable error through `logger` according to its severity.
///
/// Returns the error back only when it is critical.
pub fn handle_error(err: NpmLuauError, logger: &Logger) -> Option<NpmLuauError> {
    match err.severity() {
        ErrorSeverity::Warning => {
            logger.warn(err.user_message());
            None
        }
        ErrorSeverity::Error => {
            logger.error(err.user_message());
            None
        }
        ErrorSeverity::Critical => Some(err),
    }
}
