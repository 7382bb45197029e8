use super::*;

#[test]
fn test_default_depth_is_three() {
    let config = EngineConfig::default();
    assert_eq!(config.depth, 3);
    assert!(config.maximizing_at_root);
}

#[test]
fn test_missing_fields_take_defaults() {
    let config = EngineConfig::from_toml_str("depth = 5").unwrap();
    assert_eq!(config.depth, 5);
    assert!(config.maximizing_at_root);

    let empty = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(empty, EngineConfig::default());
}

#[test]
fn test_depth_is_clamped() {
    assert_eq!(EngineConfig::from_toml_str("depth = 0").unwrap().depth, 1);
    assert_eq!(EngineConfig::from_toml_str("depth = 40").unwrap().depth, MAX_DEPTH);

    let mut config = EngineConfig::default();
    config.set_depth(12);
    assert_eq!(config.depth, MAX_DEPTH);
}

#[test]
fn test_malformed_toml_is_an_error() {
    let err = EngineConfig::from_toml_str("depth = \"deep\"").unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = EngineConfig::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}

#[test]
fn test_round_trip_through_toml() {
    let config = EngineConfig {
        depth: 4,
        maximizing_at_root: false,
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
}
