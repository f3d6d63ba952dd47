//! Indicator pipeline: bar series in, point-in-time snapshot out.
//!
//! Every indicator is gated independently on its own minimum length, so
//! a short series yields a snapshot with absent fields rather than an
//! error. Only an empty series fails. The pipeline never reorders or
//! mutates the input; only the last value of each indicator series is
//! exposed.

use crate::indicators::error::IndicatorError;
use crate::indicators::math;
use crate::indicators::momentum::{calculate_rsi, calculate_stochastic};
use crate::indicators::trend::{calculate_ema, calculate_macd, calculate_sma};
use crate::indicators::volatility::{calculate_atr, calculate_bollinger};
use crate::indicators::volume::calculate_obv;
use crate::models::{Bar, IndicatorSnapshot};

pub const RSI_PERIOD: usize = 14;
pub const STOCH_PERIOD: usize = 14;
pub const STOCH_SMOOTH: usize = 3;
pub const ATR_PERIOD: usize = 14;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_WIDTH: f64 = 2.0;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const SMA_SHORT: usize = 20;
pub const SMA_MID: usize = 50;
pub const SMA_LONG: usize = 200;
pub const EMA_FAST: usize = 12;
pub const EMA_SLOW: usize = 26;

/// OBV is meaningful once the momentum family is, so it shares the
/// 14-bar floor.
pub const OBV_MIN_BARS: usize = 14;

pub const WEEK_BARS: usize = 5;
pub const MONTH_BARS: usize = 21;
pub const HALF_YEAR_BARS: usize = 126;
pub const YEAR_BARS: usize = 252;

/// Below this the 1-year change is absent; between this and a full year
/// of bars it degrades to a series-start delta.
pub const YEAR_FALLBACK_MIN: usize = 200;

/// Compute the full indicator snapshot for one symbol.
///
/// Fails only on an empty series; any length >= 1 succeeds with
/// per-indicator absences. Deterministic for identical input.
pub fn compute_snapshot(symbol: &str, bars: &[Bar]) -> Result<IndicatorSnapshot, IndicatorError> {
    if bars.is_empty() {
        return Err(IndicatorError::InsufficientData {
            symbol: symbol.to_string(),
        });
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let n = bars.len();

    let mut snapshot = IndicatorSnapshot {
        current_price: closes.last().copied(),
        previous_close: (n >= 2).then(|| closes[n - 2]),
        ..IndicatorSnapshot::default()
    };

    snapshot.change_1d_pct = window_change(&closes, 1);
    snapshot.change_1w_pct = window_change(&closes, WEEK_BARS);
    snapshot.change_1m_pct = window_change(&closes, MONTH_BARS);
    snapshot.change_6m_pct = window_change(&closes, HALF_YEAR_BARS);
    snapshot.change_1y_pct = year_change(&closes);

    if let Some(macd) = calculate_macd(bars, MACD_FAST, MACD_SLOW, MACD_SIGNAL) {
        snapshot.macd = Some(macd.macd);
        snapshot.macd_signal = Some(macd.signal);
        snapshot.macd_histogram = Some(macd.histogram);
    }

    snapshot.sma_20 = calculate_sma(bars, SMA_SHORT);
    snapshot.sma_50 = calculate_sma(bars, SMA_MID);
    snapshot.sma_200 = calculate_sma(bars, SMA_LONG);
    snapshot.ema_12 = calculate_ema(bars, EMA_FAST);
    snapshot.ema_26 = calculate_ema(bars, EMA_SLOW);

    snapshot.rsi = calculate_rsi(bars, RSI_PERIOD);
    if let Some(stoch) = calculate_stochastic(bars, STOCH_PERIOD, STOCH_SMOOTH) {
        snapshot.stoch_k = Some(stoch.k);
        snapshot.stoch_d = Some(stoch.d);
    }

    if let Some(bands) = calculate_bollinger(bars, BOLLINGER_PERIOD, BOLLINGER_WIDTH) {
        snapshot.bb_upper = Some(bands.upper);
        snapshot.bb_middle = Some(bands.middle);
        snapshot.bb_lower = Some(bands.lower);
    }
    snapshot.atr = calculate_atr(bars, ATR_PERIOD);

    if n >= OBV_MIN_BARS {
        snapshot.obv = calculate_obv(bars);
    }

    Ok(snapshot)
}

/// Change % over the last `k` bars; needs `k + 1` closes.
fn window_change(closes: &[f64], k: usize) -> Option<f64> {
    let n = closes.len();
    if n < k + 1 {
        return None;
    }
    Some(math::percent_change(closes[n - 1 - k], closes[n - 1]))
}

/// 1-year change with the short-series fallback: a full 252-bar window
/// when available, otherwise the delta from the first close for series
/// of at least [`YEAR_FALLBACK_MIN`] bars.
fn year_change(closes: &[f64]) -> Option<f64> {
    let n = closes.len();
    if n > YEAR_BARS {
        return window_change(closes, YEAR_BARS);
    }
    if n >= YEAR_FALLBACK_MIN {
        return Some(math::percent_change(closes[0], closes[n - 1]));
    }
    None
}
