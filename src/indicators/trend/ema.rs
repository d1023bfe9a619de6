//! EMA (Exponential Moving Average) indicator
//!
//! The first value is seeded with the SMA of the first `period` inputs, then
//! `ema[i] = value * k + ema[i - 1] * (1 - k)` with `k = 2 / (period + 1)`.

use crate::indicators::error::{IndicatorError, IndicatorResult};
use crate::models::indicators::{closes, Candle, EmaIndicator};

/// Source of EMA series for the MACD engine.
///
/// Implementations must return exactly `series.len() - period + 1` values in
/// chronological order, or `InsufficientData` when `series.len() < period`.
pub trait EmaProvider {
    fn ema(&self, series: &[f64], period: usize) -> IndicatorResult<Vec<f64>>;
}

/// The standard SMA-seeded recurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEma;

impl EmaProvider for StandardEma {
    fn ema(&self, series: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
        ema(series, period)
    }
}

impl<F> EmaProvider for F
where
    F: Fn(&[f64], usize) -> IndicatorResult<Vec<f64>>,
{
    fn ema(&self, series: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
        self(series, period)
    }
}

/// Compute the full EMA series of `series`.
pub fn ema(series: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod);
    }
    if series.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: period,
            provided: series.len(),
        });
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed = series[..period].iter().sum::<f64>() / period as f64;

    let mut values = Vec::with_capacity(series.len() - period + 1);
    values.push(seed);

    let mut prev = seed;
    for &value in &series[period..] {
        prev = value * k + prev * (1.0 - k);
        values.push(prev);
    }

    Ok(values)
}

/// Calculate the latest EMA of the candle closes for a specific period
pub fn calculate_ema(candles: &[Candle], period: usize) -> Option<EmaIndicator> {
    let values = ema(&closes(candles), period).ok()?;

    Some(EmaIndicator {
        value: *values.last()?,
        period,
    })
}

/// Calculate multiple EMAs at once, skipping periods the candles cannot satisfy
pub fn calculate_emas(candles: &[Candle], periods: &[usize]) -> Vec<EmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(candles, period))
        .collect()
}
