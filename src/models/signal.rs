use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::macd::evaluation::CrossoverType;
use crate::models::indicators::MacdSnapshot;

/// Advisory MACD read-out for one symbol.
///
/// Consumers decide on order placement; nothing here is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdSignal {
    pub symbol: String,
    pub price: f64,
    pub current: MacdSnapshot,
    pub previous: MacdSnapshot,
    pub crossover: CrossoverType,
    pub bullish_divergence: bool,
    pub bearish_divergence: bool,
    pub strength: f64,
    pub timestamp: DateTime<Utc>,
}
