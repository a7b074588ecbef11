#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_tunables() {
    let config = Config::default();
    assert_eq!(config.preloader_min_ms, 1200.0);
    assert_eq!(config.preloader_fade_ms, 800);
    assert_eq!(config.scroll_offset, 70.0);
    assert_eq!(config.scroll_duration_ms, 800.0);
    assert_eq!(config.animation_threshold, 0.1);
    assert_eq!(config.debounce_ms, 10);
    assert_eq!(config.resize_debounce_ms, 300);
    assert_eq!(config.max_particles, 50);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = Config::from_json("{}").expect("empty override should parse");
    assert_eq!(config, Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "scrollOffset": 90, "maxParticles": 20 }"#).expect("override should parse");
    assert_eq!(config.scroll_offset, 90.0);
    assert_eq!(config.max_particles, 20);
    assert_eq!(config.preloader_min_ms, 1200.0);
}

#[test]
fn unknown_field_is_rejected() {
    let err = Config::from_json(r#"{ "scrollOfset": 90 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(Config::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn threshold_above_one_is_out_of_range() {
    let err = Config::from_json(r#"{ "animationThreshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "animationThreshold", .. }));
}

#[test]
fn zero_scroll_duration_is_out_of_range() {
    let err = Config::from_json(r#"{ "scrollDurationMs": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "scrollDurationMs", .. }));
}

#[test]
fn negative_preloader_time_is_out_of_range() {
    let err = Config::from_json(r#"{ "preloaderMinMs": -5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "preloaderMinMs", .. }));
}

#[test]
fn zero_particle_cap_is_out_of_range() {
    let err = Config::from_json(r#"{ "maxParticles": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "maxParticles", .. }));
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = Config::from_json(r#"{ "logLevel": "DEBUG" }"#).expect("level should parse");
    assert_eq!(config.log_level().expect("known level"), log::Level::Debug);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = Config::from_json(r#"{ "logLevel": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownLogLevel(level) if level == "loud"));
}

#[test]
fn particle_media_query_uses_breakpoint() {
    let config = Config { particle_breakpoint_px: 1024, ..Config::default() };
    assert_eq!(config.particle_media_query(), "(min-width: 1024px)");
    assert_eq!(Config::default().particle_media_query(), "(min-width: 768px)");
}
