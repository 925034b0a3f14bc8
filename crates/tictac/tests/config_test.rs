//! Config file loading tests.

use std::io::Write;
use tictac::GameConfig;
use tictac_core::Player;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "delay_ms = 0\nseed = 9\nhuman_mark = \"O\"\nlog_filter = \"debug\"").unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.delay_ms(), 0);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(*config.human_mark(), Player::O);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &None);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = GameConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "delay_ms = \"soon\"").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_invalid_mark_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "human_mark = \"Z\"").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_seeded_strategies_agree() {
    use tictac_core::{Seats, TurnController};

    let config = GameConfig::from_toml_str("seed = 3").unwrap();
    // Center taken, so the reply is a seeded corner choice.
    let mut a = TurnController::new(Seats::default(), config.strategy());
    let mut b = TurnController::new(Seats::default(), config.strategy());
    assert_eq!(a.apply_human_move(4), b.apply_human_move(4));
}
