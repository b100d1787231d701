//! Integration tests for logger behavior.

use specialites_advisor::logger::{init_file_logging, set_level, set_level_from_str, Level};
use specialites_advisor::{debug, error, info, warn};
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn file_logging_creates_parent_directories() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("logs").join("specadvisor.log");

    assert!(init_file_logging(&path));
    set_level(Level::Warn);
    warn!("written to file");

    assert!(path.exists());
}

#[test]
fn version_matches_package() {
    assert_eq!(specialites_advisor::get_version(), env!("CARGO_PKG_VERSION"));
}
