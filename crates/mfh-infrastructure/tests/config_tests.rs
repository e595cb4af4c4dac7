//! Configuration loading and validation tests

use mfh_infrastructure::config::ConfigLoader;
use std::io::Write;

#[test]
fn test_defaults_load_without_a_file() {
    let config = ConfigLoader::new()
        .load()
        .expect("defaults should validate");

    assert_eq!(config.server.port, 3000);
    assert_eq!(config.cache.ttl_secs, 300);
    assert_eq!(config.kv.provider, "memory");
    assert_eq!(config.federation.name, "host");
    assert_eq!(config.federation.remotes.len(), 1);
}

#[test]
fn test_toml_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("should create temp file");
    writeln!(
        file,
        r#"
[server]
port = 8088

[cache]
ttl_secs = 60
"#
    )
    .expect("should write temp config");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("file config should load");

    assert_eq!(config.server.port, 8088);
    assert_eq!(config.cache.ttl_secs, 60);
    // Untouched sections keep their defaults
    assert_eq!(config.kv.provider, "memory");
    assert_eq!(config.federation.remotes.len(), 1);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/mfh.toml")
        .load()
        .expect("missing file should not be fatal");

    assert_eq!(config.server.port, 3000);
}

#[test]
fn test_env_overrides_file_and_defaults() {
    // A dedicated prefix keeps this test from leaking into the others while
    // the jail is active.
    figment::Jail::expect_with(|jail| {
        jail.set_env("MFH_TEST_SERVER_PORT", "9001");

        let config = ConfigLoader::new()
            .with_env_prefix("MFH_TEST")
            .load()
            .expect("env config should load");
        assert_eq!(config.server.port, 9001);
        Ok(())
    });
}

#[test]
fn test_zero_port_is_rejected() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("should create temp file");
    writeln!(file, "[server]\nport = 0").expect("should write temp config");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("port 0 should be rejected");
    assert!(err.to_string().contains("port"), "unexpected error: {err}");
}

#[test]
fn test_zero_ttl_is_rejected() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("should create temp file");
    writeln!(file, "[cache]\nttl_secs = 0").expect("should write temp config");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("ttl 0 should be rejected");
    assert!(err.to_string().contains("TTL"), "unexpected error: {err}");
}

#[test]
fn test_invalid_manifest_is_rejected() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("should create temp file");
    writeln!(
        file,
        r#"
[federation]
name = ""
"#
    )
    .expect("should write temp config");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect_err("empty federation name should be rejected");
    assert!(
        err.to_string().contains("host name"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_save_round_trips_through_load() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("mfh.toml");

    let loader = ConfigLoader::new();
    let config = loader.load().expect("defaults should load");
    loader
        .save_to_file(&config, &path)
        .expect("should save config");

    let reloaded = ConfigLoader::new()
        .with_config_path(&path)
        .load()
        .expect("saved config should load");
    assert_eq!(reloaded.server.port, config.server.port);
    assert_eq!(reloaded.federation.remotes, config.federation.remotes);
}
