use thiserror::Error;

/// Errors raised by the indicator engines.
///
/// Only the series-producing functions fail. Interpretation helpers
/// (crossover, divergence, strength) fall back to conservative values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("insufficient data: {required} values required, {provided} provided")]
    InsufficientData { required: usize, provided: usize },

    #[error("period must be greater than zero")]
    InvalidPeriod,
}

pub type IndicatorResult<T> = Result<T, IndicatorError>;
