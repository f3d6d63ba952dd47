//! Momentum oscillators.

pub mod rsi;
pub mod stochastic;

pub use rsi::calculate_rsi;
pub use stochastic::{calculate_stochastic, StochasticValue};
