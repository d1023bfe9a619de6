//! Price / MACD divergence over a trailing window.
//!
//! Bullish: price makes its low later than the MACD line did (momentum has
//! already bottomed). Bearish: same with highs. When several bars share the
//! extreme value the earliest one counts.

use crate::indicators::macd::evaluation::DivergenceType;

pub const DIVERGENCE_LOOKBACK: usize = 10;

pub fn is_divergence(prices: &[f64], macd_values: &[f64], kind: DivergenceType) -> bool {
    is_divergence_with_lookback(prices, macd_values, kind, DIVERGENCE_LOOKBACK)
}

/// Returns `false` when either input is shorter than `lookback`.
pub fn is_divergence_with_lookback(
    prices: &[f64],
    macd_values: &[f64],
    kind: DivergenceType,
    lookback: usize,
) -> bool {
    if lookback == 0 || prices.len() < lookback || macd_values.len() < lookback {
        return false;
    }

    let price_window = &prices[prices.len() - lookback..];
    let macd_window = &macd_values[macd_values.len() - lookback..];

    let extreme = match kind {
        DivergenceType::Bullish => first_extreme_index(|a, b| a < b),
        DivergenceType::Bearish => first_extreme_index(|a, b| a > b),
    };

    match (extreme(price_window), extreme(macd_window)) {
        (Some(price_idx), Some(macd_idx)) => price_idx > macd_idx,
        _ => false,
    }
}

/// Index of the first occurrence of the extreme value under `better`.
/// Non-finite values are ignored.
fn first_extreme_index(better: fn(f64, f64) -> bool) -> impl Fn(&[f64]) -> Option<usize> {
    move |window: &[f64]| {
        window
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
                Some((_, b)) if !better(v, b) => best,
                _ => Some((i, v)),
            })
            .map(|(i, _)| i)
    }
}
