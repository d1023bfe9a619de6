//! Runtime configuration read from the environment.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::macd::{DEFAULT_STRENGTH_SCALE, DIVERGENCE_LOOKBACK};
use crate::indicators::momentum::{
    DEFAULT_FAST_PERIOD, DEFAULT_SIGNAL_PERIOD, DEFAULT_SLOW_PERIOD,
};

pub const ENVIRONMENT_VAR: &str = "MOMENTRIX_ENV";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Deployment environment name, `sandbox` unless set.
pub fn get_environment() -> String {
    env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdConfig {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
    pub strength_scale: f64,
    pub divergence_lookback: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast_period: DEFAULT_FAST_PERIOD,
            slow_period: DEFAULT_SLOW_PERIOD,
            signal_period: DEFAULT_SIGNAL_PERIOD,
            strength_scale: DEFAULT_STRENGTH_SCALE,
            divergence_lookback: DIVERGENCE_LOOKBACK,
        }
    }
}

impl MacdConfig {
    /// Load from `MACD_*` environment variables, defaulting anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            fast_period: parse_or(&lookup, "MACD_FAST_PERIOD", defaults.fast_period)?,
            slow_period: parse_or(&lookup, "MACD_SLOW_PERIOD", defaults.slow_period)?,
            signal_period: parse_or(&lookup, "MACD_SIGNAL_PERIOD", defaults.signal_period)?,
            strength_scale: parse_or(&lookup, "MACD_STRENGTH_SCALE", defaults.strength_scale)?,
            divergence_lookback: parse_or(
                &lookup,
                "MACD_DIVERGENCE_LOOKBACK",
                defaults.divergence_lookback,
            )?,
        })
    }

    pub fn min_prices(&self) -> usize {
        self.slow_period.saturating_add(self.signal_period)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
    }
}
