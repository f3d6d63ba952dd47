//! Trend-following indicators and moving averages.

pub mod ema;
pub mod macd;
pub mod sma;

pub use ema::calculate_ema;
pub use macd::{calculate_macd, MacdValue};
pub use sma::calculate_sma;
