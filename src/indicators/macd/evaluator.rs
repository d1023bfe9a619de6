use crate::indicators::macd::evaluation::{CrossoverType, MacdEvaluation};
use crate::models::indicators::MacdSnapshot;

/// Multiplier applied to `|histogram| + |macd|` before clamping to 1.
///
/// Tuned for instruments priced in the tens to hundreds; rescale for others.
pub const DEFAULT_STRENGTH_SCALE: f64 = 100.0;

/// MACD moved from at-or-below the signal line to strictly above it.
pub fn is_bullish_crossover(current: &MacdSnapshot, previous: &MacdSnapshot) -> bool {
    current.macd > current.signal && previous.macd <= previous.signal
}

/// MACD moved from at-or-above the signal line to strictly below it.
pub fn is_bearish_crossover(current: &MacdSnapshot, previous: &MacdSnapshot) -> bool {
    current.macd < current.signal && previous.macd >= previous.signal
}

pub fn detect_crossover(current: &MacdSnapshot, previous: &MacdSnapshot) -> CrossoverType {
    if is_bullish_crossover(current, previous) {
        CrossoverType::Bullish
    } else if is_bearish_crossover(current, previous) {
        CrossoverType::Bearish
    } else {
        CrossoverType::None
    }
}

/// Strength in `[0, 1]`: `min(1, (|histogram| + |macd|) * scale)`.
///
/// NaN inputs and negative scales score 0.
pub fn signal_strength(current: &MacdSnapshot, scale: f64) -> f64 {
    let raw = (current.histogram.abs() + current.macd.abs()) * scale;
    if raw.is_nan() || raw <= 0.0 {
        return 0.0;
    }
    raw.min(1.0)
}

pub fn evaluate_macd(
    current: &MacdSnapshot,
    previous: &MacdSnapshot,
    scale: f64,
) -> MacdEvaluation {
    MacdEvaluation {
        crossover_type: detect_crossover(current, previous),
        strength: signal_strength(current, scale),
        macd_value: current.macd,
        signal_value: current.signal,
        histogram_value: current.histogram,
    }
}
