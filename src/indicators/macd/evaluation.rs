use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivergenceType {
    Bullish,
    Bearish,
}

impl fmt::Display for DivergenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivergenceType::Bullish => f.write_str("bullish"),
            DivergenceType::Bearish => f.write_str("bearish"),
        }
    }
}

impl FromStr for DivergenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bullish" => Ok(DivergenceType::Bullish),
            "bearish" => Ok(DivergenceType::Bearish),
            other => Err(format!("Unknown divergence type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdEvaluation {
    pub crossover_type: CrossoverType,
    pub strength: f64,
    pub macd_value: f64,
    pub signal_value: f64,
    pub histogram_value: f64,
}
