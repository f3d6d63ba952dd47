//! Shared numeric kernels for the indicator calculators.
//!
//! All window functions read the LAST `window` values of the slice and
//! return `None` when the slice is too short or the window is zero.

/// Arithmetic mean of the last `window` values.
pub fn sma(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Latest EMA value, seeded with the SMA of the first `window` values.
pub fn ema(values: &[f64], window: usize) -> Option<f64> {
    ema_series(values, window).and_then(|s| s.last().copied())
}

/// Full EMA series. The first entry corresponds to input index
/// `window - 1` (the SMA seed), so the output holds
/// `len - window + 1` values.
pub fn ema_series(values: &[f64], window: usize) -> Option<Vec<f64>> {
    if window == 0 || values.len() < window {
        return None;
    }
    let alpha = 2.0 / (window as f64 + 1.0);
    let seed = values[..window].iter().sum::<f64>() / window as f64;

    let mut series = Vec::with_capacity(values.len() - window + 1);
    series.push(seed);
    let mut current = seed;
    for &value in &values[window..] {
        current = alpha * value + (1.0 - alpha) * current;
        series.push(current);
    }
    Some(series)
}

/// Population standard deviation of the last `window` values.
pub fn std_dev(values: &[f64], window: usize) -> Option<f64> {
    let mean = sma(values, window)?;
    let tail = &values[values.len() - window..];
    let variance = tail.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / window as f64;
    Some(variance.sqrt())
}

/// True range of one bar against the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// Wilder smoothing: seed with the mean of the first `period` values,
/// then fold the rest with `(avg * (period - 1) + value) / period`.
pub fn wilder_smooth(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let mut avg = values[..period].iter().sum::<f64>() / period as f64;
    for &value in &values[period..] {
        avg = (avg * (period as f64 - 1.0) + value) / period as f64;
    }
    Some(avg)
}

/// Percent change from `from` to `to`.
pub fn percent_change(from: f64, to: f64) -> f64 {
    (to - from) / from * 100.0
}
