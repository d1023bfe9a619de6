//! MACD indicator engine and signal interpretation.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;

pub use indicators::IndicatorError;
