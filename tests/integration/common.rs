//! Shared fixtures for the integration tests

use npmluau::{Level, Logger};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Create a package directory with a `package.json` and its entry file
pub fn add_package(install_dir: &Path, dir: &str, name: &str, main: &str, entry: &str) -> PathBuf {
    let package_dir = install_dir.join(dir);
    fs::create_dir_all(&package_dir).unwrap();
    fs::write(
        package_dir.join("package.json"),
        format!(r#"{{ "name": "{}", "version": "1.0.0", "main": "{}" }}"#, name, main),
    )
    .unwrap();

    let entry_path = package_dir.join(main);
    fs::create_dir_all(entry_path.parent().unwrap()).unwrap();
    fs::write(entry_path, entry).unwrap();

    package_dir
}

/// Logger keeping every record it receives
pub fn recording_logger() -> (Arc<Logger>, Arc<Mutex<Vec<(Level, String)>>>) {
    let records = Arc::new(Mutex::new(Vec::new()));
    let sink_records = records.clone();

    let logger = Logger::with_sink(Arc::new(move |level: Level, message: &str| {
        sink_records.lock().push((level, message.to_string()));
    }));
    logger.set_level_filter(Level::Trace);

    (Arc::new(logger), records)
}

/// Every file below `root`, keyed by its relative path
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, fs::read(entry.path()).unwrap())
        })
        .collect()
}
