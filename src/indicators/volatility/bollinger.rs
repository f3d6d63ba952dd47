//! Bollinger Bands indicator

use crate::indicators::math;
use crate::models::Bar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Calculate Bollinger Bands.
///
/// Middle Band = SMA(period)
/// Upper/Lower Band = Middle +/- width * population standard deviation
pub fn calculate_bollinger(bars: &[Bar], period: usize, width: f64) -> Option<BollingerBands> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let middle = math::sma(&closes, period)?;
    let std = math::std_dev(&closes, period)?;

    Some(BollingerBands {
        upper: middle + width * std,
        middle,
        lower: middle - width * std,
    })
}
