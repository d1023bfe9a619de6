use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV bar as delivered by the market data collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

/// Extract the close prices of `candles`, oldest first.
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: usize,
}

/// The most recent `{macd, signal, histogram}` triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdSnapshot {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(usize, usize, usize)>,
}

impl MacdSnapshot {
    pub fn new(macd: f64, signal: f64, histogram: f64) -> Self {
        Self {
            macd,
            signal,
            histogram,
            period: None,
        }
    }
}

/// Time-aligned MACD output.
///
/// `macd`, `signal` and `histogram` always have the same length and index `i`
/// refers to the same bar in each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(usize, usize, usize)>,
}

impl MacdSeries {
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    pub fn snapshot_at(&self, index: usize) -> Option<MacdSnapshot> {
        Some(MacdSnapshot {
            macd: *self.macd.get(index)?,
            signal: *self.signal.get(index)?,
            histogram: *self.histogram.get(index)?,
            period: self.period,
        })
    }

    pub fn latest(&self) -> Option<MacdSnapshot> {
        self.snapshot_at(self.len().checked_sub(1)?)
    }

    /// Snapshot one bar before [`latest`](Self::latest).
    pub fn previous(&self) -> Option<MacdSnapshot> {
        self.snapshot_at(self.len().checked_sub(2)?)
    }
}
