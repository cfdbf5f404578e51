//! Error types and definitions for npmluau
//!
//! Fatal and run-level failures are represented by [`NpmLuauError`]. Per-package
//! problems never surface here: they are reported as a [`SkipReason`] so one
//! broken dependency cannot stop the alias build.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for npmluau operations
#[derive(Debug, Error)]
pub enum NpmLuauError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The package manager install directory is missing
    #[error("Install directory not found: {path}")]
    InstallDirNotFound { path: PathBuf },

    /// A file could not be removed while pruning
    #[error("Unable to remove {path}: {source}")]
    Prune {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Output file write errors
    #[error("Error writing to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl NpmLuauError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            NpmLuauError::Write { .. } => ErrorSeverity::Warning,

            NpmLuauError::Config { .. } => ErrorSeverity::Critical,
            NpmLuauError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            NpmLuauError::ConfigRead { .. } => ErrorSeverity::Critical,
            NpmLuauError::ConfigParse { .. } => ErrorSeverity::Critical,
            NpmLuauError::InstallDirNotFound { .. } => ErrorSeverity::Critical,
            NpmLuauError::GlobPattern { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            NpmLuauError::InstallDirNotFound { path } => {
                format!(
                    "Unable to find '{}'. Install the project dependencies first or pass a different --target.",
                    path.display()
                )
            }
            NpmLuauError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            NpmLuauError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        NpmLuauError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        NpmLuauError::Config {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        NpmLuauError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for NpmLuauError {
    fn from(err: std::io::Error) -> Self {
        NpmLuauError::io_error(err)
    }
}

impl From<glob::PatternError> for NpmLuauError {
    fn from(err: glob::PatternError) -> Self {
        NpmLuauError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for NpmLuauError {
    fn from(err: serde_json::Error) -> Self {
        NpmLuauError::JsonSerialize { source: err }
    }
}

/// Result type alias for npmluau operations
pub type Result<T> = std::result::Result<T, NpmLuauError>;

/// Why a candidate directory did not produce an alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Name starts with `.`
    Hidden,
    /// No readable `package.json`
    NoMetadata,
    /// `package.json` exists but is not a JSON object
    MalformedMetadata { path: PathBuf, message: String },
    /// No `main` field
    MissingMain,
    /// No `name` field
    MissingName,
    /// The package is this tool
    SelfPackage,
    /// The entry file could not be read as text
    EntryUnreadable { path: PathBuf, message: String },
    /// The entry file extension has no redirect strategy
    UnsupportedExtension { path: PathBuf },
    /// The re-export generator rejected the entry file
    ReexportFailed { path: PathBuf, message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Hidden => write!(f, "hidden entry"),
            SkipReason::NoMetadata => write!(f, "no package.json"),
            SkipReason::MalformedMetadata { path, message } => {
                write!(f, "unable to parse `{}`: {}", path.display(), message)
            }
            SkipReason::MissingMain => write!(f, "no `main` field"),
            SkipReason::MissingName => write!(f, "no `name` field"),
            SkipReason::SelfPackage => write!(f, "package is npmluau itself"),
            SkipReason::EntryUnreadable { path, message } => {
                write!(f, "unable to read `{}`: {}", path.display(), message)
            }
            SkipReason::UnsupportedExtension { path } => {
                write!(f, "unsupported entry point `{}`", path.display())
            }
            SkipReason::ReexportFailed { path, message } => {
                write!(f, "unable to re-export `{}`: {}", path.display(), message)
            }
        }
    }
}

/// Outcome of one resolution step
pub type Resolution<T> = std::result::Result<T, SkipReason>;
