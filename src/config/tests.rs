//! Tests for the configuration system: validation, presets, environment
//! parsing and file round-trips.

use super::*;
use crate::error::ProbeTableError;
use std::env;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config_is_valid() {
    let config = TableConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.initial_capacity, 16);
    assert_eq!(config.load_threshold, 0.75);
    assert_eq!(config.resize_factor, 2);
}

#[test]
fn test_all_presets_valid() {
    assert!(TableConfig::performance_preset().validate().is_ok());
    assert!(TableConfig::memory_preset().validate().is_ok());
    assert!(TableConfig::realtime_preset().validate().is_ok());
    assert_eq!(TableConfig::balanced_preset(), TableConfig::default());
}

#[test]
fn test_validation_rejects_zero_capacity() {
    let err = TableConfig::with_capacity(0).validate().unwrap_err();
    assert!(matches!(err, ProbeTableError::Configuration { .. }));
    assert!(err.to_string().contains("initial_capacity"));
}

#[test]
fn test_validation_rejects_bad_threshold() {
    for threshold in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
        let config = TableConfig::default().load_threshold(threshold);
        assert!(config.validate().is_err(), "threshold {} accepted", threshold);
    }
    assert!(TableConfig::default().load_threshold(1.0).validate().is_ok());
}

#[test]
fn test_validation_rejects_small_resize_factor() {
    assert!(TableConfig::default().resize_factor(0).validate().is_err());
    assert!(TableConfig::default().resize_factor(1).validate().is_err());
    assert!(TableConfig::default().resize_factor(3).validate().is_ok());
}

#[test]
fn test_env_overrides() {
    env::set_var("CFGTEST_ONE_TABLE_INITIAL_CAPACITY", "4");
    env::set_var("CFGTEST_ONE_TABLE_LOAD_THRESHOLD", "0.5");
    env::set_var("CFGTEST_ONE_TABLE_RESIZE_FACTOR", "3");

    let config = TableConfig::from_env_with_prefix("CFGTEST_ONE_").unwrap();
    assert_eq!(config.initial_capacity, 4);
    assert_eq!(config.load_threshold, 0.5);
    assert_eq!(config.resize_factor, 3);
}

#[test]
fn test_env_unparsable_falls_back_to_default() {
    env::set_var("CFGTEST_TWO_TABLE_INITIAL_CAPACITY", "lots");

    let config = TableConfig::from_env_with_prefix("CFGTEST_TWO_").unwrap();
    assert_eq!(config.initial_capacity, TableConfig::default().initial_capacity);
}

#[test]
fn test_env_invalid_value_is_rejected() {
    env::set_var("CFGTEST_THREE_TABLE_RESIZE_FACTOR", "1");
    assert!(TableConfig::from_env_with_prefix("CFGTEST_THREE_").is_err());
}

#[test]
fn test_read_env_defers_validation() {
    env::set_var("CFGTEST_FOUR_TABLE_LOAD_THRESHOLD", "7");

    let mut config = TableConfig::read_env("CFGTEST_FOUR_");
    assert_eq!(config.load_threshold, 7.0);
    assert!(config.validate().is_err());

    config.load_threshold = 0.5;
    assert!(config.validate().is_ok());
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("table.json");

    let config = TableConfig::with_capacity(32).load_threshold(0.6).resize_factor(4);
    config.save_to_file(&path).unwrap();

    let loaded = TableConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_invalid_file() {
    let dir = tempdir().unwrap();

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").unwrap();
    assert!(TableConfig::load_from_file(&garbage).is_err());

    let invalid = dir.path().join("invalid.json");
    fs::write(
        &invalid,
        r#"{"initial_capacity": 0, "load_threshold": 0.75, "resize_factor": 2}"#,
    )
    .unwrap();
    assert!(TableConfig::load_from_file(&invalid).is_err());

    assert!(TableConfig::load_from_file(dir.path().join("missing.json")).is_err());
}
