use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use npmluau::cli::args::Args;
use npmluau::cli::commands::{exit_code, generate};
use npmluau::{Level, NpmLuauError, Settings};

use super::common::{add_package, recording_logger, snapshot};

fn settings_for(target: &std::path::Path) -> Settings {
    Settings {
        target: target.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_cli_args_parsing() {
    let args = Args::try_parse_from([
        "npmluau",
        "--target",
        "game",
        "--modules-folder",
        "deps",
        "--keep-rojo-configs",
        "-v",
    ])
    .unwrap();

    assert_eq!(args.target, Some(PathBuf::from("game")));
    assert_eq!(args.modules_folder, Some("deps".to_string()));
    assert!(args.keep_rojo_configs);
    assert!(!args.keep_luaurc);
    assert_eq!(args.verbose, 1);
}

#[test]
fn test_missing_install_dir_is_fatal() {
    let temp_dir = tempdir().unwrap();
    let (logger, _) = recording_logger();

    let err = generate(&settings_for(temp_dir.path()), logger).unwrap_err();

    assert!(matches!(err, NpmLuauError::InstallDirNotFound { .. }));
    assert_eq!(exit_code(err.severity()), 1);
    assert!(err.user_message().contains("--target"));
    assert!(!temp_dir.path().join("node_modules").exists());
}

#[test]
fn test_full_run() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path().join("node_modules");

    let signal = add_package(&install_dir, "signal", "signal", "src/init.luau", "return {}");
    fs::write(signal.join(".luaurc"), "{ \"languageMode\": \"strict\" }").unwrap();
    fs::write(signal.join("default.project.json"), "{}").unwrap();
    add_package(&install_dir, "@org/data", "@org/data", "data.json", "[]");

    let (logger, _) = recording_logger();
    let report = generate(&settings_for(temp_dir.path()), logger).unwrap();

    assert_eq!(report.resolved, vec!["@org/data", "signal"]);

    let output = install_dir.join(".luau-aliases");
    assert!(output.join("signal.luau").exists());
    assert!(output.join("@org").join("data.luau").exists());

    assert!(!signal.join(".luaurc").exists());
    assert!(!signal.join("default.project.json").exists());

    let luaurc = fs::read_to_string(install_dir.join(".luaurc")).unwrap();
    assert_eq!(luaurc, "{\n    \"languageMode\": \"nocheck\"\n}");
}

#[test]
fn test_keep_flags_skip_pruning() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path().join("node_modules");

    let signal = add_package(&install_dir, "signal", "signal", "src/init.luau", "return {}");
    fs::write(signal.join(".luaurc"), "{}").unwrap();
    fs::write(signal.join("default.project.json"), "{}").unwrap();

    let settings = Settings {
        keep_luaurc: true,
        keep_rojo_configs: true,
        extension: "lua".to_string(),
        ..settings_for(temp_dir.path())
    };
    let (logger, _) = recording_logger();
    generate(&settings, logger).unwrap();

    assert!(signal.join(".luaurc").exists());
    assert!(signal.join("default.project.json").exists());
    assert!(install_dir.join(".luau-aliases").join("signal.lua").exists());
}

#[test]
fn test_repeated_runs_produce_identical_output() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path().join("node_modules");
    add_package(&install_dir, "signal", "signal", "src/init.luau", "export type A = number\nreturn {}");

    let settings = settings_for(temp_dir.path());
    let (logger, _) = recording_logger();

    generate(&settings, logger.clone()).unwrap();
    let first = snapshot(&install_dir);
    generate(&settings, logger).unwrap();
    let second = snapshot(&install_dir);

    assert_eq!(first, second);
}

#[test]
fn test_luaurc_write_failure_is_logged() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path().join("node_modules");

    add_package(&install_dir, "signal", "signal", "src/init.luau", "return {}");
    // A directory in the way makes the `.luaurc` write fail
    fs::create_dir_all(install_dir.join(".luaurc")).unwrap();

    let (logger, records) = recording_logger();
    let report = generate(&settings_for(temp_dir.path()), logger).unwrap();

    assert_eq!(report.resolved, vec!["signal"]);
    assert!(install_dir.join(".luaurc").is_dir());
    assert!(records
        .lock()
        .iter()
        .any(|(level, message)| *level == Level::Warn && message.contains(".luaurc")));
}
