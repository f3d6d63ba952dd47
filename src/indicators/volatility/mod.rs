//! Volatility indicators.

pub mod atr;
pub mod bollinger;

pub use atr::calculate_atr;
pub use bollinger::{calculate_bollinger, BollingerBands};
