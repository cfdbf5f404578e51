use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

use npmluau::{AliasBuilder, BuildOptions, Level, Logger, SkipReason, TypeReexporter};

use super::common::{add_package, recording_logger, snapshot};

fn options(install_dir: &std::path::Path) -> BuildOptions {
    BuildOptions {
        output: install_dir.join(".luau-aliases"),
        extension: "luau".to_string(),
    }
}

fn builder() -> AliasBuilder {
    AliasBuilder::new(Arc::new(TypeReexporter::new()), Arc::new(Logger::new()))
}

#[test]
fn test_valid_and_invalid_packages() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "alpha", "alpha", "src/init.luau", "return {}");
    add_package(install_dir, "beta", "beta", "init.lua", "return {}");
    add_package(install_dir, "gamma", "gamma", "data.json", "{}");

    // No metadata at all
    fs::create_dir_all(install_dir.join("no-metadata")).unwrap();
    // Malformed metadata
    fs::create_dir_all(install_dir.join("broken")).unwrap();
    fs::write(install_dir.join("broken").join("package.json"), "{ not json").unwrap();
    // No `main` field
    fs::create_dir_all(install_dir.join("no-main")).unwrap();
    fs::write(install_dir.join("no-main").join("package.json"), r#"{ "name": "no-main" }"#).unwrap();
    // Entry point missing on disk
    fs::create_dir_all(install_dir.join("ghost")).unwrap();
    fs::write(
        install_dir.join("ghost").join("package.json"),
        r#"{ "name": "ghost", "main": "init.luau" }"#,
    )
    .unwrap();

    let report = builder().build(install_dir, &options(install_dir));

    assert_eq!(report.resolved, vec!["alpha", "beta", "gamma"]);
    assert_eq!(report.written_count(), 3);
    assert_eq!(report.skipped.len(), 4);
    assert_eq!(
        report.skip_reason(&install_dir.join("no-metadata")),
        Some(&SkipReason::NoMetadata)
    );
    assert_eq!(
        report.skip_reason(&install_dir.join("no-main")),
        Some(&SkipReason::MissingMain)
    );
    assert!(matches!(
        report.skip_reason(&install_dir.join("broken")),
        Some(SkipReason::MalformedMetadata { .. })
    ));
    assert!(matches!(
        report.skip_reason(&install_dir.join("ghost")),
        Some(SkipReason::EntryUnreadable { .. })
    ));

    let files = snapshot(&install_dir.join(".luau-aliases"));
    assert_eq!(files.len(), 3);
}

#[test]
fn test_build_is_idempotent() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(
        install_dir,
        "signal",
        "signal",
        "src/init.luau",
        "export type Signal<T...> = { fire: (T...) -> () }\nreturn {}",
    );
    add_package(install_dir, "@org/config", "@org/config", "config.toml", "key = 1");

    let builder = builder();
    builder.build(install_dir, &options(install_dir));
    let first = snapshot(&install_dir.join(".luau-aliases"));

    builder.build(install_dir, &options(install_dir));
    let second = snapshot(&install_dir.join(".luau-aliases"));

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_self_package_is_excluded() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "npmluau", "npmluau", "main.js", "");
    add_package(install_dir, "other", "other", "init.luau", "return 1");

    let report = builder().build(install_dir, &options(install_dir));

    assert_eq!(report.resolved, vec!["other"]);
    assert_eq!(
        report.skip_reason(&install_dir.join("npmluau")),
        Some(&SkipReason::SelfPackage)
    );
    assert!(!install_dir.join(".luau-aliases").join("npmluau.luau").exists());
}

#[test]
fn test_scoped_packages() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "@scope/name", "@scope/name", "src/init.luau", "return {}");
    add_package(install_dir, "plain", "plain", "src/init.luau", "return {}");

    let report = builder().build(install_dir, &options(install_dir));
    assert_eq!(report.resolved, vec!["@scope/name", "plain"]);

    let output = install_dir.join(".luau-aliases");
    let scoped = fs::read_to_string(output.join("@scope").join("name.luau")).unwrap();
    let plain = fs::read_to_string(output.join("plain.luau")).unwrap();

    assert!(scoped.contains("require('../../@scope/name/src/init.luau')"));
    assert!(plain.contains("require('../plain/src/init.luau')"));
}

#[test]
fn test_extension_dispatch() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(
        install_dir,
        "a",
        "a",
        "a.luau",
        "export type Value = number\nreturn { value = 1 }",
    );
    add_package(install_dir, "b", "b", "b.json", "{ \"value\": 1 }");
    add_package(install_dir, "c", "c", "c.exe", "MZ");

    let report = builder().build(install_dir, &options(install_dir));

    let output = install_dir.join(".luau-aliases");
    assert_eq!(
        fs::read_to_string(output.join("a.luau")).unwrap(),
        "local module = require('../a/a.luau')\n\
         export type Value = module.Value\n\
         return module\n"
    );
    assert_eq!(
        fs::read_to_string(output.join("b.luau")).unwrap(),
        "return require(\"../b/b.json\")"
    );
    assert!(!output.join("c.luau").exists());
    assert!(matches!(
        report.skip_reason(&install_dir.join("c")),
        Some(SkipReason::UnsupportedExtension { .. })
    ));
}

#[test]
fn test_reexport_failure_only_skips_that_package() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "broken", "broken", "init.luau", "local t = {");
    add_package(install_dir, "fine", "fine", "init.luau", "return {}");

    let (logger, records) = recording_logger();
    let builder = AliasBuilder::new(Arc::new(TypeReexporter::new()), logger);
    let report = builder.build(install_dir, &options(install_dir));

    assert_eq!(report.resolved, vec!["fine"]);
    assert!(matches!(
        report.skip_reason(&install_dir.join("broken")),
        Some(SkipReason::ReexportFailed { .. })
    ));
    assert!(records
        .lock()
        .iter()
        .any(|(level, message)| *level == Level::Warn && message.contains("`broken`")));
}

#[test]
fn test_partial_write_failure() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "first", "first", "data.json", "{}");
    add_package(install_dir, "second", "second", "data.json", "{}");
    // A NUL byte cannot appear in a file name on any platform
    add_package(install_dir, "weird", "weird\\u0000name", "data.json", "{}");

    let (logger, records) = recording_logger();
    let builder = AliasBuilder::new(Arc::new(TypeReexporter::new()), logger);
    let report = builder.build(install_dir, &options(install_dir));

    assert_eq!(report.resolved.len(), 3);
    assert_eq!(report.failed_writes, vec!["weird\u{0}name".to_string()]);
    assert_eq!(report.written_count(), 2);

    let output = install_dir.join(".luau-aliases");
    assert!(output.join("first.luau").exists());
    assert!(output.join("second.luau").exists());

    let warnings: Vec<String> = records
        .lock()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, message)| message.clone())
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("unable to write require redirection file"));
    assert!(warnings[0].contains("weird"));
}

#[test]
fn test_hidden_directories_are_ignored() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, ".cache", "cached", "init.luau", "return 1");
    add_package(install_dir, "visible", "visible", "init.luau", "return 1");

    let report = builder().build(install_dir, &options(install_dir));

    assert_eq!(report.resolved, vec!["visible"]);
    assert!(report.skip_reason(&install_dir.join(".cache")).is_none());
}

#[test]
fn test_directory_name_differs_from_package_name() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "some-dir", "real-name", "init.luau", "return {}");

    let report = builder().build(install_dir, &options(install_dir));
    assert_eq!(report.resolved, vec!["real-name"]);

    let output = install_dir.join(".luau-aliases");
    assert!(!output.join("some-dir.luau").exists());
    assert_eq!(
        fs::read_to_string(output.join("real-name.luau")).unwrap(),
        "local module = require('../real-name/init.luau')\nreturn module\n"
    );
}

#[test]
fn test_absolute_main_resolves_inside_package() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "abs", "abs", "init.luau", "export type Id = string\nreturn {}");
    let package_json = install_dir.join("abs").join("package.json");
    fs::write(
        &package_json,
        r#"{ "name": "abs", "version": "1.0.0", "main": "/init.luau" }"#,
    )
    .unwrap();

    let report = builder().build(install_dir, &options(install_dir));

    assert_eq!(report.resolved, vec!["abs"]);
    assert!(report.skipped.is_empty());
    let alias = fs::read_to_string(install_dir.join(".luau-aliases").join("abs.luau")).unwrap();
    assert!(alias.contains("require('../abs/init.luau')"));
    assert!(alias.contains("export type Id = module.Id"));
}

#[test]
fn test_invalid_luau_is_skipped() {
    let temp_dir = tempdir().unwrap();
    let install_dir = temp_dir.path();

    add_package(install_dir, "double-equals", "double-equals", "init.luau", "local x = = 1");
    add_package(install_dir, "valid", "valid", "init.luau", "return {}");

    let report = builder().build(install_dir, &options(install_dir));

    assert_eq!(report.resolved, vec!["valid"]);
    match report.skip_reason(&install_dir.join("double-equals")) {
        Some(SkipReason::ReexportFailed { message, .. }) => {
            assert!(message.starts_with("unable to parse code"))
        }
        other => panic!("Expected ReexportFailed, got {:?}", other),
    }
}
