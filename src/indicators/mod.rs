pub mod error;

pub mod macd;
pub mod momentum;
pub mod trend;

pub use error::{IndicatorError, IndicatorResult};
