//! EMA (Exponential Moving Average) indicator

use crate::indicators::math;
use crate::models::Bar;

/// Calculate the EMA of closes for a specific period.
pub fn calculate_ema(bars: &[Bar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::ema(&closes, period)
}
