//! Tests for the configuration system: validation, presets, environment
//! variables and file persistence.

use super::*;
use crate::error::ScanError;
use crate::scan::Strategy;
use crate::simd::{LaneOrder, WordWidth};
use std::env;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = ScanConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.strategy, Strategy::OnePass);
    assert_eq!(config.delimiter, ';');
    assert_eq!(config.word_width, WordWidth::native());
    assert_eq!(config.lane_order, LaneOrder::Native);
}

#[test]
fn test_all_presets_valid() {
    assert!(ScanConfig::performance_preset().validate().is_ok());
    assert!(ScanConfig::memory_preset().validate().is_ok());
    assert!(ScanConfig::realtime_preset().validate().is_ok());
    assert!(ScanConfig::balanced_preset().validate().is_ok());
}

#[test]
fn test_preset_characteristics() {
    assert_eq!(ScanConfig::performance_preset().strategy, Strategy::WordParallel);
    assert!(!ScanConfig::memory_preset().strategy.allocates());
    assert_eq!(ScanConfig::realtime_preset().strategy, Strategy::OnePass);
    assert_eq!(ScanConfig::balanced_preset(), ScanConfig::default());
}

#[test]
fn test_validation_rejects_astral_delimiter() {
    let config = ScanConfig {
        delimiter: '\u{1F600}',
        ..ScanConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.category(), "config");
    assert!(err.to_string().contains("1F600"));
}

#[test]
fn test_validation_accepts_bmp_delimiters() {
    for delimiter in [',', '|', '\t', '\0', '\u{b7}', '\u{ffff}'] {
        let config = ScanConfig {
            delimiter,
            ..ScanConfig::default()
        };
        assert!(config.validate().is_ok(), "delimiter {:?}", delimiter);
    }
}

#[test]
fn test_from_env_with_prefix() {
    let prefix = "FIELDSCAN_TEST_ENV_";
    env::set_var(format!("{}STRATEGY", prefix), "word_parallel");
    env::set_var(format!("{}DELIMITER", prefix), "|");
    env::set_var(format!("{}WORD_WIDTH", prefix), "32");
    env::set_var(format!("{}LANE_ORDER", prefix), "big");

    let config = ScanConfig::from_env_with_prefix(prefix).unwrap();
    assert_eq!(config.strategy, Strategy::WordParallel);
    assert_eq!(config.delimiter, '|');
    assert_eq!(config.word_width, WordWidth::W32);
    assert_eq!(config.lane_order, LaneOrder::Big);

    for name in ["STRATEGY", "DELIMITER", "WORD_WIDTH", "LANE_ORDER"] {
        env::remove_var(format!("{}{}", prefix, name));
    }
}

#[test]
fn test_from_env_ignores_unparsable_values() {
    let prefix = "FIELDSCAN_TEST_BAD_ENV_";
    env::set_var(format!("{}STRATEGY", prefix), "quantum");
    env::set_var(format!("{}WORD_WIDTH", prefix), "16");
    env::set_var(format!("{}DELIMITER", prefix), ";;");

    let config = ScanConfig::from_env_with_prefix(prefix).unwrap();
    assert_eq!(config, ScanConfig::default());

    for name in ["STRATEGY", "WORD_WIDTH", "DELIMITER"] {
        env::remove_var(format!("{}{}", prefix, name));
    }
}

#[test]
fn test_from_env_rejects_invalid_delimiter() {
    let prefix = "FIELDSCAN_TEST_ASTRAL_ENV_";
    env::set_var(format!("{}DELIMITER", prefix), "\u{1F600}");

    let result = ScanConfig::from_env_with_prefix(prefix);
    assert!(result.is_err());

    env::remove_var(format!("{}DELIMITER", prefix));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scan.json");

    let config = ScanConfig {
        strategy: Strategy::LengthPrecheck,
        delimiter: ',',
        word_width: WordWidth::W32,
        lane_order: LaneOrder::Little,
    };
    config.save_to_file(&path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"length_precheck\""));
    assert!(raw.contains("\"w32\""));

    let loaded = ScanConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "strategy": "bounded_double_scan" }"#).unwrap();

    let loaded = ScanConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.strategy, Strategy::BoundedDoubleScan);
    assert_eq!(loaded.delimiter, ';');
}

#[test]
fn test_load_invalid_files() {
    let dir = tempdir().unwrap();

    let path = dir.path().join("garbage.json");
    fs::write(&path, "not json").unwrap();
    let err = ScanConfig::load_from_file(&path).unwrap_err();
    assert_eq!(err.category(), "config");

    let path = dir.path().join("astral.json");
    fs::write(&path, "{ \"delimiter\": \"\u{1F600}\" }").unwrap();
    assert!(ScanConfig::load_from_file(&path).is_err());

    let missing = dir.path().join("missing.json");
    assert!(ScanConfig::load_from_file(&missing).is_err());
}

#[test]
fn test_file_system_errors_are_io() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    let err = ScanConfig::load_from_file(&missing).unwrap_err();
    assert_eq!(err.category(), "io");
    assert!(err.is_recoverable());

    let unwritable = dir.path().join("no_such_dir").join("scan.json");
    let err = ScanConfig::default().save_to_file(&unwritable).unwrap_err();
    assert!(matches!(err, ScanError::Io(_)));
    assert!(err.is_recoverable());
}
