//! Configuration loader tests

use std::env;
use std::io::Write;

use weave_infrastructure::config::{AppConfig, ConfigLoader};

#[test]
fn test_load_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[resolver]
max_depth = 32
inherit_overrides = true

[logging]
level = "debug"
"#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("WEAVE_TEST_FILE__")
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.resolver.max_depth, 32);
    assert!(config.resolver.inherit_overrides);
    assert!(config.resolver.detect_cycles);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("WEAVE_TEST_MISSING__")
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();

    let result = ConfigLoader::new()
        .with_env_prefix("WEAVE_TEST_INVALID__")
        .with_config_path(file.path())
        .load();

    assert!(result.is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weave.toml");
    let loader = ConfigLoader::new()
        .with_env_prefix("WEAVE_TEST_SAVE__")
        .with_config_path(&path);

    let mut config = AppConfig::default();
    config.resolver.detect_cycles = false;
    config.logging.json_format = true;
    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
}

/// Run with: `cargo test -p weave-infrastructure --test unit -- --ignored --test-threads=1`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_nested_keys() {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var("WEAVE_TEST_ENV__RESOLVER__MAX_DEPTH", "12");
    }

    let config = ConfigLoader::new()
        .with_env_prefix("WEAVE_TEST_ENV__")
        .with_config_path("/nonexistent/weave.toml")
        .load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var("WEAVE_TEST_ENV__RESOLVER__MAX_DEPTH");
    }

    assert_eq!(config.unwrap().resolver.max_depth, 12);
}
