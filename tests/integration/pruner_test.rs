use std::fs;
use std::path::Path;
use tempfile::tempdir;

use npmluau::core::{config_file_filter, remove_files};

fn populate(root: &Path) {
    for dir in ["x", "y", "z", "nested/deeper"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    fs::write(root.join("x").join(".luaurc"), "{}").unwrap();
    fs::write(root.join("y").join("default.project.json"), "{}").unwrap();
    fs::write(root.join("z").join("notes.txt"), "notes").unwrap();
    fs::write(root.join("nested").join("deeper").join(".luaurc"), "{}").unwrap();
}

#[test]
fn test_only_rejected_files_are_removed() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    populate(root);

    let removed = remove_files(root, |path: &Path| {
        path.file_name().is_some_and(|name| name != ".luaurc")
    })
    .unwrap();

    assert_eq!(removed, 2);
    assert!(!root.join("x").join(".luaurc").exists());
    assert!(!root.join("nested").join("deeper").join(".luaurc").exists());
    assert!(root.join("y").join("default.project.json").exists());
    assert!(root.join("z").join("notes.txt").exists());
    assert!(root.join("x").is_dir());
    assert!(root.join("nested").join("deeper").is_dir());
}

#[test]
fn test_config_file_filter_combinations() {
    let cases = [
        (false, false, vec!["z/notes.txt"]),
        (true, false, vec!["nested/deeper/.luaurc", "x/.luaurc", "z/notes.txt"]),
        (false, true, vec!["y/default.project.json", "z/notes.txt"]),
    ];

    for (keep_luaurc, keep_rojo, expected) in cases {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        populate(root);

        let keep = config_file_filter(keep_luaurc, keep_rojo).unwrap();
        remove_files(root, keep).unwrap();

        let mut remaining: Vec<String> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        remaining.sort();

        assert_eq!(remaining, expected, "keep_luaurc={} keep_rojo={}", keep_luaurc, keep_rojo);
    }
}

#[test]
fn test_keep_everything_removes_nothing() {
    let temp_dir = tempdir().unwrap();
    populate(temp_dir.path());

    let removed = remove_files(temp_dir.path(), |_: &Path| true).unwrap();
    assert_eq!(removed, 0);
}
