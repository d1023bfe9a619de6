pub mod divergence;
pub mod evaluation;
pub mod evaluator;

pub use divergence::*;
pub use evaluation::{CrossoverType, DivergenceType, MacdEvaluation};
pub use evaluator::*;
