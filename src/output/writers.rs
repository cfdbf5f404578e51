//! Output writing functionality
//!
//! Besides the alias files themselves, a run leaves a `.luaurc` behind in the
//! install directory so type checkers ignore the installed sources.

use crate::error::{NpmLuauError, Result, ResultExt};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LUAURC_FILE_NAME: &str = ".luaurc";

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|e| NpmLuauError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| NpmLuauError::Write {
                path: self.path.clone(),
                source: e,
            })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LuauRc {
    language_mode: &'static str,
}

/// `.luaurc` content disabling type checking, indented with four spaces
pub fn nocheck_luaurc() -> Result<String> {
    let config = LuauRc {
        language_mode: "nocheck",
    };

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    config.serialize(&mut serializer)?;

    String::from_utf8(buffer).with_context(|| "generated .luaurc is not valid UTF-8")
}

/// Write the nocheck `.luaurc` into `dir`, replacing any existing one
pub fn write_nocheck_luaurc(dir: &Path) -> Result<PathBuf> {
    let writer = FileWriter::new(dir.join(LUAURC_FILE_NAME));
    writer.write(&nocheck_luaurc()?)?;
    Ok(writer.path().to_path_buf())
}
