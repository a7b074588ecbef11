use super::*;

#[test]
fn out_of_range_names_field_and_value() {
    let err = ConfigError::OutOfRange { field: "animationThreshold", value: 2.0 };
    assert_eq!(err.to_string(), "site config field `animationThreshold` out of range: 2");
}

#[test]
fn dom_error_names_operation() {
    let err = PageError::Dom { op: "addEventListener", detail: "TypeError".to_owned() };
    assert_eq!(err.to_string(), "addEventListener failed: TypeError");
}

#[test]
fn config_error_converts_transparently() {
    let err: PageError = ConfigError::UnknownLogLevel("loud".to_owned()).into();
    assert_eq!(err.to_string(), "unknown log level: loud");
}

#[test]
fn parse_error_wraps_serde_message() {
    let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("truncated json should not parse");
    };
    let err = ConfigError::from(source);
    assert!(err.to_string().starts_with("failed to parse site config:"));
}
