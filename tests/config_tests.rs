//! Integration tests for configuration management

use shotlog::config::{Config, ConfigOverrides};
use shotlog::core::models::{DistanceUnit, Mode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty());
    assert!(!config.store.database.is_empty());
    assert!(!config.paths.reports_dir.is_empty());
    assert!(!config.paths.exports_dir.is_empty());
    assert_eq!(config.distance_unit(), DistanceUnit::Yards);
    assert_eq!(config.mode(), Mode::DrivingRange);
}

#[test]
fn test_config_from_toml_sections() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/shotlog.log"
verbose = true

[store]
database = "/data/golf.db"

[paths]
reports_dir = "./reports"
exports_dir = "./exports"

[recording]
distance_unit = "Meters"
mode = "golf_course"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert!(config.logging.verbose);
    assert_eq!(config.store.database, "/data/golf.db");
    assert_eq!(config.database_path().to_string_lossy(), "/data/golf.db");
    assert_eq!(config.paths.exports_dir, "./exports");
    assert_eq!(config.distance_unit(), DistanceUnit::Meters);
    assert_eq!(config.mode(), Mode::GolfCourse);
}

#[test]
fn test_missing_sections_use_serde_defaults() {
    let config = Config::from_toml("[logging]\nlevel = \"error\"\n").expect("Failed to parse");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert_eq!(config.store.database, "");
    assert!(config.database_path().ends_with("shots.db"));
    assert_eq!(config.distance_unit(), DistanceUnit::Yards);
}

#[test]
fn test_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$SHOTLOG/logs/run.log"

[store]
database = "$SHOTLOG/shots.db"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("shotlog"));
    assert!(!config.logging.file.contains("$SHOTLOG"));
    assert!(!config.store.database.contains("$SHOTLOG"));
    assert!(config.store.database.ends_with("shots.db"));
}

#[test]
fn test_get_set_validates_values() {
    let mut config = Config::from_defaults();

    config.set("level", "WARNING").expect("level alias");
    assert_eq!(config.get("level").as_deref(), Some("warn"));
    assert!(config.set("level", "loud").is_err());

    config.set("distance-unit", "m").expect("unit alias");
    assert_eq!(config.get("distance_unit").as_deref(), Some("Meters"));
    assert!(config.set("distance_unit", "furlongs").is_err());

    config.set("mode", "course").expect("mode alias");
    assert_eq!(config.mode(), Mode::GolfCourse);

    config.set("verbose", "true").expect("verbose");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "maybe").is_err());

    config.set("db", "/tmp/x.db").expect("database");
    assert_eq!(config.get("database").as_deref(), Some("/tmp/x.db"));

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("mode", "golf_course").expect("set mode");
    config.unset("mode", &defaults).expect("unset mode");
    assert_eq!(config.recording.mode, defaults.recording.mode);

    config.set("exports_dir", "/elsewhere").expect("set dir");
    config.unset("exports-dir", &defaults).expect("unset dir");
    assert_eq!(config.paths.exports_dir, defaults.paths.exports_dir);

    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_save_to_and_load_from() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("database", "/golf/shots.db").expect("set database");
    config.save_to(&config_file).expect("save");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.store.database, "/golf/shots.db");
}

#[test]
fn test_load_from_creates_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let config = Config::load_from(&config_file);
    assert!(config_file.exists());
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_load_from_merges_new_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").expect("write old config");

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, "error");
    assert!(!config.store.database.is_empty());

    let rewritten = fs::read_to_string(&config_file).expect("read back");
    assert!(rewritten.contains("[recording]"));
}

#[test]
fn test_load_from_falls_back_on_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    fs::write(&config_file, "this is [not toml").expect("write");

    let config = Config::load_from(&config_file);
    assert_eq!(config.store.database, Config::from_defaults().store.database);
}

#[test]
fn test_overrides_apply() {
    let mut config = Config::from_defaults();

    config.apply_overrides(&ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        database: Some("/tmp/override.db".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        exports_dir: None,
    });

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.store.database, "/tmp/override.db");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(
        config.paths.exports_dir,
        Config::from_defaults().paths.exports_dir
    );
}

#[test]
fn test_display_lists_sections() {
    let display_str = Config::from_defaults().to_string();

    for section in ["[logging]", "[store]", "[paths]", "[recording]"] {
        assert!(display_str.contains(section), "missing {section}");
    }
    assert!(display_str.contains("distance_unit"));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[store]
database = ""
"#,
    )
    .expect("Failed to parse config");

    assert!(config.merge_defaults(&Config::from_defaults()));
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert!(!config.store.database.is_empty());

    assert!(!config.merge_defaults(&Config::from_defaults()));
}

#[test]
fn test_config_file_path() {
    let path = Config::get_config_file_path();
    assert!(path.to_string_lossy().contains("shotlog"));
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(name == "config.toml" || name == "dconfig.toml");
}
