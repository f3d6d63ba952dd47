//! OBV (On-Balance Volume) indicator

use crate::models::Bar;

/// Cumulative On-Balance Volume, seeded at 0 from the first bar.
///
/// Each bar adds +volume when its close is above the previous close,
/// -volume when below, and 0 on an unchanged close.
pub fn calculate_obv(bars: &[Bar]) -> Option<f64> {
    if bars.is_empty() {
        return None;
    }

    let mut obv = 0.0;
    for window in bars.windows(2) {
        if window[1].close > window[0].close {
            obv += window[1].volume;
        } else if window[1].close < window[0].close {
            obv -= window[1].volume;
        }
    }
    Some(obv)
}
