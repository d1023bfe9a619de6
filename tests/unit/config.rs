//! Unit tests for configuration loading

use std::collections::HashMap;

use momentrix::config::{ConfigError, MacdConfig};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = MacdConfig::default();
    assert_eq!(config.fast_period, 12);
    assert_eq!(config.slow_period, 26);
    assert_eq!(config.signal_period, 9);
    assert_eq!(config.strength_scale, 100.0);
    assert_eq!(config.divergence_lookback, 10);
    assert_eq!(config.min_prices(), 35);
}

#[test]
fn test_empty_lookup_uses_defaults() {
    let config = MacdConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, MacdConfig::default());
}

#[test]
fn test_overrides() {
    let config = MacdConfig::from_lookup(lookup(&[
        ("MACD_FAST_PERIOD", "8"),
        ("MACD_SLOW_PERIOD", " 21 "),
        ("MACD_STRENGTH_SCALE", "0.5"),
    ]))
    .unwrap();
    assert_eq!(config.fast_period, 8);
    assert_eq!(config.slow_period, 21);
    assert_eq!(config.signal_period, 9);
    assert_eq!(config.strength_scale, 0.5);
}

#[test]
fn test_invalid_value() {
    let result = MacdConfig::from_lookup(lookup(&[("MACD_SIGNAL_PERIOD", "nine")]));
    assert_eq!(
        result,
        Err(ConfigError::InvalidValue {
            key: "MACD_SIGNAL_PERIOD".to_string(),
            value: "nine".to_string(),
        })
    );
}

#[test]
fn test_config_json_roundtrip_fields() {
    let json = serde_json::to_value(MacdConfig::default()).unwrap();
    assert_eq!(json["fast_period"], 12);
    assert_eq!(json["strength_scale"], 100.0);
}
