//! Require path computation for alias files
//!
//! Alias files live in `<install dir>/.luau-aliases`, so reaching a package's
//! entry file means climbing back to the install directory and descending by
//! package name. Paths here are Luau require strings and always use `/`.

use crate::models::package::NestingLevel;
use std::path::{Path, PathBuf};

/// Join and normalize path segments into a `/` separated path.
///
/// Empty and `.` segments are dropped, `..` removes the previous segment when
/// there is one, and `\` is treated as a separator.
pub fn normalize_segments<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for part in parts {
        for segment in part.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => match segments.last() {
                    Some(&last) if last != ".." => {
                        segments.pop();
                    }
                    _ => segments.push(".."),
                },
                other => segments.push(other),
            }
        }
    }

    segments.join("/")
}

/// Package name joined with its entry path, e.g. `@org/pkg/src/init.luau`
pub fn module_identifier(name: &str, main_path: &str) -> String {
    normalize_segments([name, main_path])
}

/// Require path from an alias file back to the package entry file
pub fn relative_reference(name: &str, main_path: &str, level: NestingLevel) -> String {
    let mut reference = "../".repeat(level.get() as usize);
    reference.push_str(&module_identifier(name, main_path));
    reference
}

/// Location of a package's entry file on disk.
///
/// `main` is always read relative to the package, even when it is written
/// as an absolute path, and `..` cannot climb above the package directory.
pub fn entry_path(package_dir: &Path, main_path: &str) -> PathBuf {
    let mut path = package_dir.to_path_buf();

    for segment in normalize_segments([main_path]).split('/') {
        if !segment.is_empty() && segment != ".." {
            path.push(segment);
        }
    }

    path
}
