//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{closes, Candle, EmaIndicator, MacdSeries, MacdSnapshot};
pub use signal::MacdSignal;
