//! Stochastic oscillator (%K / %D)

use crate::models::Bar;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StochasticValue {
    pub k: f64,
    pub d: f64,
}

/// Calculate the stochastic oscillator over a `period`-bar window.
///
/// %K = 100 * (close - low_n) / (high_n - low_n)
/// %D = `smooth`-bar SMA of %K
///
/// %D averages however many %K values exist when the series is shorter
/// than `period + smooth - 1` bars. A flat window (high == low) maps to
/// a neutral 50.
pub fn calculate_stochastic(bars: &[Bar], period: usize, smooth: usize) -> Option<StochasticValue> {
    if period == 0 || smooth == 0 || bars.len() < period {
        return None;
    }

    let k_count = (bars.len() - period + 1).min(smooth);
    let mut k_values = Vec::with_capacity(k_count);
    for offset in (0..k_count).rev() {
        let end = bars.len() - offset;
        let window = &bars[end - period..end];
        k_values.push(percent_k(window));
    }

    let k = *k_values.last()?;
    let d = k_values.iter().sum::<f64>() / k_values.len() as f64;
    Some(StochasticValue { k, d })
}

fn percent_k(window: &[Bar]) -> f64 {
    let high = window.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let low = window.iter().map(|b| b.low).fold(f64::MAX, f64::min);
    let close = window[window.len() - 1].close;

    if high == low {
        return 50.0;
    }
    100.0 * (close - low) / (high - low)
}
