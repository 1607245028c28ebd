//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and validation.

use pretty_assertions::assert_eq;

use dialsim_core::common::ConfigError;
use dialsim_core::config::Config;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.modulus, 100);
    assert_eq!(config.start, 50);
    assert_eq!(config.target, 0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_full_json() {
    let config: Config =
        serde_json::from_str(r#"{ "modulus": 60, "start": 12, "target": 59 }"#).unwrap();
    assert_eq!(config.modulus, 60);
    assert_eq!(config.start, 12);
    assert_eq!(config.target, 59);
}

#[test]
fn test_config_partial_json_falls_back_to_defaults() {
    let config: Config = serde_json::from_str(r#"{ "target": 25 }"#).unwrap();
    assert_eq!(config.modulus, 100);
    assert_eq!(config.start, 50);
    assert_eq!(config.target, 25);
}

#[test]
fn test_config_empty_json_is_the_default() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_validate_rejects_zero_modulus() {
    let config = Config {
        modulus: 0,
        start: 0,
        target: 0,
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroModulus));
}

#[test]
fn test_validate_rejects_start_off_the_dial() {
    let config = Config {
        modulus: 100,
        start: 100,
        target: 0,
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::StartOutOfRange {
            start: 100,
            modulus: 100
        })
    );
}

#[test]
fn test_validate_rejects_target_off_the_dial() {
    let config = Config {
        modulus: 100,
        start: 0,
        target: 250,
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::TargetOutOfRange {
            target: 250,
            modulus: 100
        })
    );
}

#[test]
fn test_validate_accepts_boundary_positions() {
    let config = Config {
        modulus: 1,
        start: 0,
        target: 0,
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::StartOutOfRange {
        start: 120,
        modulus: 100,
    };
    let text = err.to_string();
    assert!(text.contains("120"), "unexpected display: {text}");
    assert!(text.contains("100"), "unexpected display: {text}");

    assert_eq!(
        ConfigError::ZeroModulus.to_string(),
        "dial modulus must be non-zero"
    );
}

#[test]
fn test_config_error_is_error() {
    use std::error::Error;
    let err = ConfigError::ZeroModulus;
    let _: &dyn Error = &err;
}
