//! Integration tests for configuration management

use specialites_advisor::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.dataset.is_empty(),
        "Default dataset should not be empty"
    );
    assert!(
        !config.paths.out_dir.is_empty(),
        "Default out_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.recommendation.strength_weight, 2);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
dataset = "./data/specialites.csv"
catalog = "./catalog.toml"
out_dir = "./exports"
reports_dir = "./reports"

[recommendation]
strength_weight = 4
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.dataset, "./data/specialites.csv");
    assert_eq!(config.paths.catalog, "./catalog.toml");
    assert_eq!(config.paths.out_dir, "./exports");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.recommendation.strength_weight, 4);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "warn"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_empty());
    assert!(!config.logging.verbose);
    assert!(config.paths.dataset.is_empty());
    assert_eq!(config.recommendation.strength_weight, 2);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
level = "info"
file = "$ADVISOR_HOME/test.log"

[paths]
dataset = "$ADVISOR_HOME/data/specialites.csv"
reports_dir = "$ADVISOR_HOME/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    let advisor_dir = Config::get_advisor_dir();
    let advisor_dir = advisor_dir.to_string_lossy();

    assert!(!config.logging.file.contains("$ADVISOR_HOME"));
    assert!(config.logging.file.starts_with(advisor_dir.as_ref()));
    assert!(config.logging.file.ends_with("test.log"));
    assert!(config.paths.dataset.starts_with(advisor_dir.as_ref()));
    assert!(config.paths.reports_dir.ends_with("reports"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    config.set("level", "debug").expect("set level");
    assert_eq!(config.get("level"), Some("debug".to_string()));

    config.set("dataset", "/data/other.csv").expect("set dataset");
    assert_eq!(config.get("dataset"), Some("/data/other.csv".to_string()));

    config.set("out-dir", "/exports").expect("dashed key");
    assert_eq!(config.get("out_dir"), Some("/exports".to_string()));

    config.set("verbose", "true").expect("set verbose");
    assert_eq!(config.get("verbose"), Some("true".to_string()));

    config.set("strength_weight", "5").expect("set weight");
    assert_eq!(config.get("strength_weight"), Some("5".to_string()));

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.get("unknown_key").is_none());
}

#[test]
fn test_config_set_rejects_out_of_range_weight() {
    let mut config = Config::from_defaults();

    for bad in ["0", "6", "-1", "two"] {
        assert!(
            config.set("strength_weight", bad).is_err(),
            "weight {bad} should be rejected"
        );
    }
    assert_eq!(config.recommendation.strength_weight, 2);
}

#[test]
fn test_config_unset() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("catalog", "/custom/catalog.toml").expect("set");
    config.set("strength_weight", "4").expect("set");

    config.unset("catalog", &defaults).expect("unset catalog");
    config.unset("strength_weight", &defaults).expect("unset weight");

    assert_eq!(config.paths.catalog, defaults.paths.catalog);
    assert_eq!(
        config.recommendation.strength_weight,
        defaults.recommendation.strength_weight
    );
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "error").expect("set");
    config.set("reports_dir", "/tmp/reports").expect("set");
    config.set("strength_weight", "3").expect("set");
    config.save_to(&config_file).expect("save");

    assert!(config_file.exists());
    let loaded = Config::load_from(&config_file);

    assert_eq!(loaded.logging.level, "error");
    assert_eq!(loaded.paths.reports_dir, "/tmp/reports");
    assert_eq!(loaded.recommendation.strength_weight, 3);
}

#[test]
fn test_load_from_creates_missing_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let loaded = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(loaded.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_load_from_falls_back_on_invalid_toml() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::write(&config_file, "this is [not valid toml").expect("write");

    let loaded = Config::load_from(&config_file);
    let defaults = Config::from_defaults();

    assert_eq!(loaded.logging.level, defaults.logging.level);
    assert_eq!(loaded.paths.dataset, defaults.paths.dataset);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("info".to_string()),
        file: Some("/tmp/override.log".to_string()),
        verbose: Some(true),
        dataset: Some("/override/data.csv".to_string()),
        catalog: Some("/override/catalog.toml".to_string()),
        out_dir: Some("/override/out".to_string()),
        reports_dir: Some("/override/reports".to_string()),
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/override.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.dataset, "/override/data.csv");
    assert_eq!(config.paths.catalog, "/override/catalog.toml");
    assert_eq!(config.paths.out_dir, "/override/out");
    assert_eq!(config.paths.reports_dir, "/override/reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let original = config.clone();

    let overrides = ConfigOverrides {
        dataset: Some("/partial/data.csv".to_string()),
        ..ConfigOverrides::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.paths.dataset, "/partial/data.csv");
    assert_eq!(config.logging.level, original.logging.level);
    assert_eq!(config.paths.out_dir, original.paths.out_dir);
    assert_eq!(config.logging.verbose, original.logging.verbose);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display = format!("{config}");

    assert!(display.contains("[logging]"));
    assert!(display.contains("[paths]"));
    assert!(display.contains("[recommendation]"));
    assert!(display.contains("dataset = "));
    assert!(display.contains("strength_weight = "));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "info"
"#;
    let mut config = Config::from_toml(toml_str).expect("parse");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.paths.dataset, defaults.paths.dataset);
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();
    config.paths.dataset = "/mine.csv".to_string();

    let changed = config.merge_defaults(&defaults);

    assert!(!changed);
    assert_eq!(config.paths.dataset, "/mine.csv");
}

#[test]
fn test_get_advisor_dir() {
    let dir = Config::get_advisor_dir();
    assert!(dir.ends_with("specadvisor"));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name");

    assert!(name == "config.toml" || name == "dconfig.toml");
    assert_eq!(path.parent(), Some(Config::get_advisor_dir().as_path()));
}

#[test]
fn test_persist_set_ignores_run_overrides() {
    let (_temp_dir, config_file) = setup_temp_config();
    let stored = Config::from_defaults();
    stored.save_to(&config_file).expect("save");

    let mut effective = Config::load_from(&config_file);
    effective.apply_overrides(&ConfigOverrides {
        dataset: Some("/tmp/one-off.csv".to_string()),
        out_dir: Some("/tmp/one-off-out".to_string()),
        ..ConfigOverrides::default()
    });
    assert_eq!(effective.paths.dataset, "/tmp/one-off.csv");

    Config::persist_set(&config_file, "level", "debug").expect("persist");

    let saved = fs::read_to_string(&config_file).expect("read saved config");
    assert!(!saved.contains("/tmp/one-off"), "override leaked:\n{saved}");

    let reloaded = Config::load_from(&config_file);
    assert_eq!(reloaded.logging.level, "debug");
    assert_eq!(reloaded.paths.dataset, stored.paths.dataset);
    assert_eq!(reloaded.paths.out_dir, stored.paths.out_dir);
}

#[test]
fn test_persist_unset_restores_default_on_disk() {
    let (_temp_dir, config_file) = setup_temp_config();
    let defaults = Config::from_defaults();
    Config::persist_set(&config_file, "strength_weight", "5").expect("persist set");

    let stored = Config::persist_unset(&config_file, "strength_weight", &defaults)
        .expect("persist unset");

    assert_eq!(stored.recommendation.strength_weight, 2);
    assert_eq!(Config::load_from(&config_file).recommendation.strength_weight, 2);
    assert!(Config::persist_unset(&config_file, "nope", &defaults).is_err());
}
