//! Integration tests for Settings config loading.
//!
//! Note: these tests assume no SSMGR_* variables are set in the test
//! environment.

use std::fs;

use tempfile::TempDir;

use ssmgr::application::ApplicationError;
use ssmgr::config::Settings;

#[test]
fn given_no_config_file_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(&dir.path().join("ssmgr.toml"))).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_when_load_then_applies_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ssmgr.toml");
    fs::write(
        &path,
        r#"
region = "eu-west-1"
endpoint_url = "http://localhost:4566"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
    assert_eq!(
        settings.endpoint_url.as_deref(),
        Some("http://localhost:4566")
    );
}

#[test]
fn given_partial_config_file_when_load_then_unset_fields_stay_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ssmgr.toml");
    fs::write(&path, "region = \"us-east-2\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).unwrap();

    assert_eq!(settings.region.as_deref(), Some("us-east-2"));
    assert!(settings.endpoint_url.is_none());
}

#[test]
fn given_malformed_config_file_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ssmgr.toml");
    fs::write(&path, "region = [unterminated").unwrap();

    let result = Settings::load_from(Some(&path));

    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("parse"), "{message}")
        }
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn given_loaded_settings_when_cli_region_given_then_flag_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ssmgr.toml");
    fs::write(&path, "region = \"eu-west-1\"\n").unwrap();

    let settings = Settings::load_from(Some(&path))
        .unwrap()
        .with_region(Some("sa-east-1".to_string()));

    assert_eq!(settings.region.as_deref(), Some("sa-east-1"));
}
