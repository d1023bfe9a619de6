//! Turns a price series into an advisory MACD signal.

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::MacdConfig;
use crate::indicators::error::{IndicatorError, IndicatorResult};
use crate::indicators::macd::{
    detect_crossover, is_divergence_with_lookback, signal_strength, DivergenceType,
};
use crate::indicators::momentum::calculate_macd;
use crate::models::signal::MacdSignal;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate the latest MACD state of `prices` (oldest first).
    ///
    /// With a single-bar MACD series the previous snapshot equals the current
    /// one, so no crossover is reported.
    pub fn evaluate(
        symbol: &str,
        prices: &[f64],
        config: &MacdConfig,
    ) -> IndicatorResult<MacdSignal> {
        let series = calculate_macd(
            prices,
            config.fast_period,
            config.slow_period,
            config.signal_period,
        )?;

        let insufficient = || IndicatorError::InsufficientData {
            required: config.min_prices(),
            provided: prices.len(),
        };
        let current = series.latest().ok_or_else(insufficient)?;
        let previous = series.previous().unwrap_or(current);
        let price = *prices.last().ok_or_else(insufficient)?;

        let lookback = config.divergence_lookback;
        let signal = MacdSignal {
            symbol: symbol.to_string(),
            price,
            current,
            previous,
            crossover: detect_crossover(&current, &previous),
            bullish_divergence: is_divergence_with_lookback(
                prices,
                &series.macd,
                DivergenceType::Bullish,
                lookback,
            ),
            bearish_divergence: is_divergence_with_lookback(
                prices,
                &series.macd,
                DivergenceType::Bearish,
                lookback,
            ),
            strength: signal_strength(&current, config.strength_scale),
            timestamp: Utc::now(),
        };

        debug!(
            symbol,
            macd = current.macd,
            signal = current.signal,
            histogram = current.histogram,
            crossover = ?signal.crossover,
            strength = signal.strength,
            "MACD evaluated"
        );

        Ok(signal)
    }

    /// Evaluate each symbol independently; one failure does not affect the rest.
    pub fn evaluate_batch<S, P>(
        inputs: &[(S, P)],
        config: &MacdConfig,
    ) -> Vec<(String, IndicatorResult<MacdSignal>)>
    where
        S: AsRef<str>,
        P: AsRef<[f64]>,
    {
        inputs
            .iter()
            .map(|(symbol, prices)| {
                let symbol = symbol.as_ref();
                let result = Self::evaluate(symbol, prices.as_ref(), config);
                if let Err(e) = &result {
                    warn!(symbol, error = %e, "MACD evaluation skipped");
                }
                (symbol.to_string(), result)
            })
            .collect()
    }
}
