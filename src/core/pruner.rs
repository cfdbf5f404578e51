//! Removal of configuration files shipped inside installed packages
//!
//! Some packages publish their own `.luaurc` or Rojo project files, which
//! change how tooling interprets the whole install directory.

use crate::core::parallel::parallel_process_with_errors;
use crate::error::{NpmLuauError, Result};
use crate::output::LUAURC_FILE_NAME;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const ROJO_PROJECT_PATTERN: &str = "*.project.json";

/// Delete every file under `root` for which `keep` returns false.
///
/// Directories are never removed and symbolic links are not followed.
/// Returns how many files were deleted.
pub fn remove_files<F>(root: &Path, keep: F) -> Result<usize>
where
    F: Fn(&Path) -> bool + Sync,
{
    let mut doomed: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            NpmLuauError::directory_traversal_error(path, err.to_string())
        })?;

        if entry.file_type().is_dir() {
            continue;
        }
        if !keep(entry.path()) {
            doomed.push(entry.into_path());
        }
    }

    let removed = parallel_process_with_errors(doomed, |path| {
        fs::remove_file(&path).map_err(|source| NpmLuauError::Prune { path, source })
    })?;

    Ok(removed.len())
}

/// Filter keeping everything except the configuration files to prune
pub fn config_file_filter(
    keep_luaurc: bool,
    keep_rojo_configs: bool,
) -> Result<impl Fn(&Path) -> bool + Sync> {
    let rojo_project = Pattern::new(ROJO_PROJECT_PATTERN)?;

    Ok(move |path: &Path| {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            return true;
        };

        if file_name == LUAURC_FILE_NAME {
            return keep_luaurc;
        }
        if rojo_project.matches(file_name) {
            return keep_rojo_configs;
        }
        true
    })
}
