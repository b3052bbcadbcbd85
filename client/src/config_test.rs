#![allow(clippy::float_cmp)]

use counter::InvalidTargetPolicy;
use serde_json::json;

use super::*;

#[test]
fn defaults_match_stock_page() {
    let config = PageConfig::default();
    assert_eq!(config.theme_storage_key, "theme");
    assert_eq!(config.mobile_breakpoint_px, 768.0);
    assert_eq!(config.counter_selector, ".stat-number");
    assert_eq!(config.counter_target_attribute, "data-target");
    assert_eq!(config.log_level, "info");
    assert_eq!(config.counter, CounterConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn absent_or_blank_inline_block_uses_defaults() {
    assert_eq!(PageConfig::from_inline(None).expect("defaults"), PageConfig::default());
    assert_eq!(PageConfig::from_inline(Some("  \n ")).expect("defaults"), PageConfig::default());
}

#[test]
fn partial_block_overrides_named_fields() {
    let raw = json!({
        "theme_storage_key": "site-theme",
        "counter": { "duration_ms": 1200, "invalid_target": "render_nan" }
    })
    .to_string();
    let config = PageConfig::from_inline(Some(&raw)).expect("valid config");
    assert_eq!(config.theme_storage_key, "site-theme");
    assert_eq!(config.counter.duration_ms, 1200.0);
    assert_eq!(config.counter.threshold, 0.5);
    assert_eq!(config.counter.invalid_target, InvalidTargetPolicy::RenderNaN);
    assert_eq!(config.counter_selector, ".stat-number");
}

#[test]
fn malformed_json_is_an_error() {
    let err = PageConfig::from_inline(Some("{ not json")).expect_err("should fail");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn invalid_counter_settings_are_rejected() {
    let raw = json!({ "counter": { "threshold": 2.0 } }).to_string();
    let err = PageConfig::from_json(&raw).expect_err("should fail");
    assert!(matches!(err, ConfigError::Counter(CounterError::InvalidThreshold(_))));
}

#[test]
fn log_level_is_case_insensitive() {
    let raw = json!({ "log_level": "DEBUG" }).to_string();
    assert!(PageConfig::from_json(&raw).is_ok());
}

#[test]
fn unknown_log_level_is_rejected() {
    let raw = json!({ "log_level": "loud" }).to_string();
    let err = PageConfig::from_json(&raw).expect_err("should fail");
    assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
}

#[test]
fn negative_breakpoint_is_rejected() {
    let raw = json!({ "mobile_breakpoint_px": -1.0 }).to_string();
    assert!(matches!(PageConfig::from_json(&raw), Err(ConfigError::Breakpoint(_))));
}
