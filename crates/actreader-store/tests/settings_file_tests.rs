#![allow(clippy::unwrap_used, clippy::expect_used)]

use actreader_core::errors::ExErrorKind;
use actreader_core::settings::Settings;
use actreader_store::settings::{load_or_create_settings, load_settings, save_settings};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_is_created_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join("UiPathTeam")
        .join("ActivityReader")
        .join("configuration.yml");

    let settings = load_or_create_settings(&path);

    assert_eq!(settings, Settings::default());
    assert!(path.exists());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("ClassRecord:"));
    assert!(written.contains("ActivityClasses:"));
    assert!(written.contains("System.Activities.NativeActivity"));
    assert!(written.contains("TypeString:"));
    assert!(written.contains("System.Collections.Generic"));
}

#[test]
fn test_written_defaults_load_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configuration.yml");

    save_settings(&path, &Settings::default()).unwrap();

    assert_eq!(load_settings(&path).unwrap(), Settings::default());
}

#[test]
fn test_existing_file_is_respected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configuration.yml");
    fs::write(
        &path,
        "ClassRecord:\n  ActivityClasses:\n    - Acme.Root\nTypeString:\n  Namespaces: []\n",
    )
    .unwrap();

    let settings = load_or_create_settings(&path);

    assert!(settings.activity_roots().contains("Acme.Root"));
    assert!(!settings.activity_roots().contains("System.Activities.Activity"));
    assert!(settings.namespaces().is_empty());
}

#[test]
fn test_partial_file_defaults_missing_section() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configuration.yml");
    fs::write(&path, "TypeString:\n  Namespaces:\n    - Acme\n").unwrap();

    let settings = load_settings(&path).unwrap();

    assert_eq!(settings.class_record, Settings::default().class_record);
    assert!(settings.namespaces().contains("Acme"));
}

#[test]
fn test_malformed_file_is_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("configuration.yml");
    fs::write(&path, "ClassRecord: [unclosed\n").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);

    // The lenient loader falls back to defaults and leaves the file alone.
    assert_eq!(load_or_create_settings(&path), Settings::default());
    assert_eq!(fs::read_to_string(&path).unwrap(), "ClassRecord: [unclosed\n");
}

#[test]
fn test_unreadable_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_settings(&temp_dir.path().join("missing.yml")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.op(), Some("load_settings"));
}
