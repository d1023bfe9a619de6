//! Unit tests for signal engine

use momentrix::config::MacdConfig;
use momentrix::indicators::macd::{
    detect_crossover, is_divergence, signal_strength, CrossoverType, DivergenceType,
};
use momentrix::indicators::momentum::calculate_macd;
use momentrix::indicators::IndicatorError;
use momentrix::signals::SignalEngine;

fn wave(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i as f64 * 0.25).sin() * 4.0 + i as f64 * 0.05)
        .collect()
}

#[test]
fn test_evaluate_matches_indicator_functions() {
    let config = MacdConfig::default();
    let prices = wave(90);
    let signal = SignalEngine::evaluate("BTC-PERP", &prices, &config).unwrap();

    let series = calculate_macd(&prices, 12, 26, 9).unwrap();
    let current = series.latest().unwrap();
    let previous = series.previous().unwrap();

    assert_eq!(signal.symbol, "BTC-PERP");
    assert_eq!(signal.price, *prices.last().unwrap());
    assert_eq!(signal.current, current);
    assert_eq!(signal.previous, previous);
    assert_eq!(signal.crossover, detect_crossover(&current, &previous));
    assert_eq!(
        signal.bullish_divergence,
        is_divergence(&prices, &series.macd, DivergenceType::Bullish)
    );
    assert_eq!(
        signal.bearish_divergence,
        is_divergence(&prices, &series.macd, DivergenceType::Bearish)
    );
    assert_eq!(signal.strength, signal_strength(&current, 100.0));
}

#[test]
fn test_evaluate_strength_in_range() {
    let config = MacdConfig::default();
    for len in [35, 50, 75, 120] {
        let signal = SignalEngine::evaluate("ETH-PERP", &wave(len), &config).unwrap();
        assert!((0.0..=1.0).contains(&signal.strength));
    }
}

#[test]
fn test_single_bar_series_has_no_crossover() {
    let config = MacdConfig::default();
    let prices = wave(35);
    let signal = SignalEngine::evaluate("SOL-PERP", &prices, &config).unwrap();
    assert_eq!(signal.previous, signal.current);
    assert_eq!(signal.crossover, CrossoverType::None);
}

#[test]
fn test_evaluate_insufficient_data() {
    let config = MacdConfig::default();
    let result = SignalEngine::evaluate("BTC-PERP", &wave(30), &config);
    assert!(matches!(
        result,
        Err(IndicatorError::InsufficientData { required: 35, provided: 30 })
    ));
}

#[test]
fn test_evaluate_uses_configured_periods() {
    let config = MacdConfig {
        fast_period: 3,
        slow_period: 6,
        signal_period: 4,
        ..MacdConfig::default()
    };
    let prices = wave(12);
    let signal = SignalEngine::evaluate("BTC-PERP", &prices, &config).unwrap();
    assert_eq!(signal.current.period, Some((3, 6, 4)));
}

#[test]
fn test_evaluate_batch_keeps_order_and_isolates_failures() {
    let config = MacdConfig::default();
    let inputs = vec![
        ("BTC-PERP", wave(60)),
        ("ETH-PERP", wave(10)),
        ("SOL-PERP", wave(40)),
    ];
    let results = SignalEngine::evaluate_batch(&inputs, &config);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].0, "BTC-PERP");
    assert!(results[0].1.is_ok());
    assert_eq!(results[1].0, "ETH-PERP");
    assert!(results[1].1.is_err());
    assert!(results[2].1.is_ok());
}

#[test]
fn test_signal_serializes_to_json() {
    let config = MacdConfig::default();
    let signal = SignalEngine::evaluate("BTC-PERP", &wave(50), &config).unwrap();
    let json = serde_json::to_value(&signal).unwrap();
    assert_eq!(json["symbol"], "BTC-PERP");
    assert!(json["current"]["macd"].is_number());
    assert!(json["crossover"].is_string());
}

#[test]
fn test_evaluate_with_overflowing_configured_period() {
    let slow = usize::MAX.to_string();
    let config = MacdConfig::from_lookup(|key: &str| {
        (key == "MACD_SLOW_PERIOD").then(|| slow.clone())
    })
    .unwrap();
    assert_eq!(config.min_prices(), usize::MAX);

    let result = SignalEngine::evaluate("BTC-PERP", &wave(50), &config);
    assert!(matches!(
        result,
        Err(IndicatorError::InsufficientData { provided: 50, .. })
    ));
}
