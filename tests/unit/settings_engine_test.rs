//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, dot-path reads and writes, persistence and reset.

use frostmark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use frostmark::types::errors::SettingsError;
use frostmark::types::settings::Settings;
use serde_json::json;
use tempfile::TempDir;

/// Helper: a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// Without a config file, `load()` returns the built-in defaults.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.general.log_level, "warn");
    assert_eq!(settings.export.default_path, "bookmarks.html");
    assert_eq!(settings.general.database_path, None);
}

/// A change made with `set_value` is visible to a new engine on the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("export.default_path", json!("/tmp/out.html"))
            .unwrap();
        engine
            .set_value("general.database_path", json!("/tmp/store.db"))
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.export.default_path, "/tmp/out.html");
    assert_eq!(settings.general.database_path.as_deref(), Some("/tmp/store.db"));
}

#[test]
fn test_get_value_by_key() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);

    assert_eq!(engine.get_value("general.log_level").unwrap(), json!("warn"));
    assert_eq!(
        engine.get_value("import").unwrap(),
        json!({"default_browser": "firefox"})
    );
    assert!(matches!(
        engine.get_value("general.nope"),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    for key in ["", "general.", "missing.key", "general.log_level.deeper"] {
        assert!(
            matches!(engine.set_value(key, json!("x")), Err(SettingsError::InvalidKey(_))),
            "key {:?} should be rejected",
            key
        );
    }
    assert!(!dir.path().join("settings.json").exists());
}

/// A value of the wrong type leaves the settings unchanged.
#[test]
fn test_wrong_type_is_invalid_value() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let result = engine.set_value("general.log_level", json!(42));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    assert_eq!(engine.get_settings(), &Settings::default());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("general.log_level", json!("debug")).unwrap();

    engine.reset().unwrap();

    assert_eq!(engine.get_settings(), &Settings::default());
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), Settings::default());
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a").join("b").join("settings.json");
    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));

    engine.set_value("import.default_browser", json!("opera")).unwrap();
    assert!(path.is_file());
    assert_eq!(engine.get_config_path(), path.to_string_lossy());
}
