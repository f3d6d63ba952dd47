//! ATR (Average True Range) indicator

use crate::indicators::math;
use crate::models::Bar;

/// Calculate ATR with Wilder's smoothing.
///
/// TR = max(high - low, |high - prev_close|, |low - prev_close|)
///
/// Needs `period + 1` bars for the first true range.
pub fn calculate_atr(bars: &[Bar], period: usize) -> Option<f64> {
    if period == 0 || bars.len() < period + 1 {
        return None;
    }

    let tr_values: Vec<f64> = bars
        .windows(2)
        .map(|w| math::true_range(w[1].high, w[1].low, w[0].close))
        .collect();

    math::wilder_smooth(&tr_values, period)
}
