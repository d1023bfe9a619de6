//! Signal evaluation interfaces.

pub mod engine;

pub use engine::SignalEngine;
