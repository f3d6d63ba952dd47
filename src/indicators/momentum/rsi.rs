//! RSI (Relative Strength Index) indicator

use crate::indicators::math;
use crate::models::Bar;

/// Calculate RSI using Wilder's smoothing.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Needs `period + 1` bars for the first delta. A series with no losses
/// at all yields RSI 100 by convention.
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);

    for window in bars.windows(2) {
        let change = window[1].close - window[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(change.abs());
        }
    }

    let avg_gain = math::wilder_smooth(&gains, period)?;
    let avg_loss = math::wilder_smooth(&losses, period)?;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}
