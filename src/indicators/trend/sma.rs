//! SMA (Simple Moving Average) indicator

use crate::indicators::math;
use crate::models::Bar;

/// Arithmetic mean of the last `period` closes.
pub fn calculate_sma(bars: &[Bar], period: usize) -> Option<f64> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    math::sma(&closes, period)
}
