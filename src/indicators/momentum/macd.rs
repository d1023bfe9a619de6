//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::error::{IndicatorError, IndicatorResult};
use crate::indicators::trend::ema::{EmaProvider, StandardEma};
use crate::models::indicators::{closes, Candle, MacdSeries, MacdSnapshot};

pub const DEFAULT_FAST_PERIOD: usize = 12;
pub const DEFAULT_SLOW_PERIOD: usize = 26;
pub const DEFAULT_SIGNAL_PERIOD: usize = 9;

/// Calculate the MACD series
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// Requires at least `slow_period + signal_period` prices. `fast_period <
/// slow_period` is expected but not checked.
pub fn calculate_macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> IndicatorResult<MacdSeries> {
    calculate_macd_with(&StandardEma, prices, fast_period, slow_period, signal_period)
}

/// Same as [`calculate_macd`] with a caller-supplied EMA source.
pub fn calculate_macd_with<E: EmaProvider + ?Sized>(
    provider: &E,
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> IndicatorResult<MacdSeries> {
    let required = slow_period.saturating_add(signal_period);
    if prices.len() < required {
        return Err(IndicatorError::InsufficientData {
            required,
            provided: prices.len(),
        });
    }

    let fast_ema = provider.ema(prices, fast_period)?;
    let slow_ema = provider.ema(prices, slow_period)?;

    // The faster EMA starts emitting earlier; line both up on their last bar.
    let (fast_aligned, slow_aligned) = align_tails(&fast_ema, &slow_ema);
    let macd_line: Vec<f64> = fast_aligned
        .iter()
        .zip(slow_aligned)
        .map(|(fast, slow)| fast - slow)
        .collect();

    let signal_line = provider.ema(&macd_line, signal_period)?;

    // Histogram starts where the signal line does.
    let (macd, signal) = align_tails(&macd_line, &signal_line);
    let histogram = macd.iter().zip(signal).map(|(m, s)| m - s).collect();

    Ok(MacdSeries {
        macd: macd.to_vec(),
        signal: signal.to_vec(),
        histogram,
        period: Some((fast_period, slow_period, signal_period)),
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &[f64]) -> IndicatorResult<MacdSeries> {
    calculate_macd(
        prices,
        DEFAULT_FAST_PERIOD,
        DEFAULT_SLOW_PERIOD,
        DEFAULT_SIGNAL_PERIOD,
    )
}

/// Calculate MACD over candle closes
pub fn calculate_macd_from_candles(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> IndicatorResult<MacdSeries> {
    calculate_macd(&closes(candles), fast_period, slow_period, signal_period)
}

/// Latest `{macd, signal, histogram}` for `prices`.
pub fn current_macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> IndicatorResult<MacdSnapshot> {
    let series = calculate_macd(prices, fast_period, slow_period, signal_period)?;
    series.latest().ok_or(IndicatorError::InsufficientData {
        required: slow_period.saturating_add(signal_period),
        provided: prices.len(),
    })
}

/// Trim the longer slice's head so both end on the same element.
fn align_tails<'a>(a: &'a [f64], b: &'a [f64]) -> (&'a [f64], &'a [f64]) {
    let len = a.len().min(b.len());
    (&a[a.len() - len..], &b[b.len() - len..])
}
