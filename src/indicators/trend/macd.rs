//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::math;
use crate::models::Bar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Calculate MACD from closes.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD series
/// Histogram = MACD - Signal
///
/// Requires `slow + signal_period` bars so the signal line has a stable
/// seed.
pub fn calculate_macd(
    bars: &[Bar],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Option<MacdValue> {
    if fast >= slow || bars.len() < slow + signal_period {
        return None;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let fast_series = math::ema_series(&closes, fast)?;
    let slow_series = math::ema_series(&closes, slow)?;

    // slow_series[i] aligns with fast_series[i + slow - fast]; the MACD
    // series starts once both EMAs exist.
    let offset = slow - fast;
    let macd_series: Vec<f64> = slow_series
        .iter()
        .enumerate()
        .map(|(i, slow_ema)| fast_series[i + offset] - slow_ema)
        .collect();

    let macd = *macd_series.last()?;
    let signal = math::ema(&macd_series, signal_period)?;

    Some(MacdValue {
        macd,
        signal,
        histogram: macd - signal,
    })
}
