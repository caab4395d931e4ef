//! Configured Defaults Tests
//!
//! Defaults from ringkv.toml fill unset kinds and never override
//! explicit options.

use crate::common::*;
use ringkv::{fetch, Error, FetchConfig, Quorum, CONFIG_FILE_NAME};
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> FetchConfig {
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, content).unwrap();
    FetchConfig::from_file(&path).unwrap()
}

#[test]
fn defaults_reach_the_operation() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
[fetch]
r = "quorum"
timeout_ms = 4000
sloppy_quorum = false
"#,
    );
    let cluster = cluster_with_user();

    fetch(users_42())
        .with_defaults(&config.fetch)
        .execute(&cluster)
        .unwrap();

    let op = cluster.last();
    assert_eq!(op.r(), Some(Quorum::Quorum.int_value()));
    assert_eq!(op.timeout_ms(), Some(4000));
    assert_eq!(op.sloppy_quorum(), Some(false));
    assert!(op.pr().is_none());
}

#[test]
fn explicit_options_override_defaults() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[fetch]\nr = \"all\"\ntimeout_ms = 4000\n");
    let cluster = cluster_with_user();

    fetch(users_42())
        .with_r(Quorum::One)
        .with_defaults(&config.fetch)
        .with_timeout(100)
        .execute(&cluster)
        .unwrap();

    let op = cluster.last();
    assert_eq!(op.r(), Some(-2));
    assert_eq!(op.timeout_ms(), Some(100));
}

#[test]
fn default_file_adds_no_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    FetchConfig::write_default_if_missing(&path).unwrap();
    let config = FetchConfig::from_file(&path).unwrap();
    let cluster = cluster_with_user();

    fetch(users_42())
        .with_defaults(&config.fetch)
        .execute(&cluster)
        .unwrap();

    let op = cluster.last();
    assert!(op.r().is_none());
    assert!(op.timeout_ms().is_none());
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[fetch]\npr = \"every\"\n").unwrap();

    let err = FetchConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
