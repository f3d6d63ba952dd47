//! The scoring rule table.
//!
//! Rules are data: an ordered list of (predicate, delta, reason)
//! entries over the snapshot. The reasoning trail's order is the list
//! order, and a rule whose inputs are absent simply never fires.
//!
//! Known oddity carried over from the original heuristic: the three
//! per-moving-average checks score +1 each without a reasoning entry,
//! while the all/none summary entries add a reasoning line (and -2
//! only in the all-bearish case). Changing this would change
//! recommendation outcomes.

use crate::models::IndicatorSnapshot;

pub struct ScoringRule {
    pub name: &'static str,
    pub applies: fn(&IndicatorSnapshot) -> bool,
    pub delta: i32,
    pub reason: Option<&'static str>,
}

/// (available, bullish) counts over the three SMAs. Both are zero when
/// the current price is absent, so every MA rule skips.
fn ma_counts(s: &IndicatorSnapshot) -> (usize, usize) {
    let price = match s.current_price {
        Some(p) => p,
        None => return (0, 0),
    };
    let mut available = 0;
    let mut bullish = 0;
    for ma in s.moving_averages().into_iter().flatten() {
        available += 1;
        if price > ma {
            bullish += 1;
        }
    }
    (available, bullish)
}

fn price_above(s: &IndicatorSnapshot, ma: Option<f64>) -> bool {
    matches!((s.current_price, ma), (Some(p), Some(m)) if p > m)
}

pub const RULES: &[ScoringRule] = &[
    ScoringRule {
        name: "rsi_oversold",
        applies: |s| matches!(s.rsi, Some(r) if r < 30.0),
        delta: 2,
        reason: Some("RSI indicates oversold condition (RSI < 30)"),
    },
    ScoringRule {
        name: "rsi_overbought",
        applies: |s| matches!(s.rsi, Some(r) if r > 70.0),
        delta: -2,
        reason: Some("RSI indicates overbought condition (RSI > 70)"),
    },
    ScoringRule {
        name: "rsi_neutral_bullish",
        applies: |s| matches!(s.rsi, Some(r) if (30.0..=50.0).contains(&r)),
        delta: 1,
        reason: Some("RSI in neutral-bullish range"),
    },
    ScoringRule {
        name: "rsi_neutral_bearish",
        applies: |s| matches!(s.rsi, Some(r) if r > 50.0 && r <= 70.0),
        delta: -1,
        reason: Some("RSI in neutral-bearish range"),
    },
    ScoringRule {
        name: "macd_bullish_crossover",
        applies: |s| {
            matches!(
                (s.macd, s.macd_signal, s.macd_histogram),
                (Some(m), Some(sig), Some(h)) if m > sig && h > 0.0
            )
        },
        delta: 2,
        reason: Some("MACD bullish crossover detected"),
    },
    ScoringRule {
        name: "macd_bearish_crossover",
        applies: |s| {
            matches!(
                (s.macd, s.macd_signal, s.macd_histogram),
                (Some(m), Some(sig), Some(h)) if m < sig && h < 0.0
            )
        },
        delta: -2,
        reason: Some("MACD bearish crossover detected"),
    },
    ScoringRule {
        name: "price_above_sma_20",
        applies: |s| price_above(s, s.sma_20),
        delta: 1,
        reason: None,
    },
    ScoringRule {
        name: "price_above_sma_50",
        applies: |s| price_above(s, s.sma_50),
        delta: 1,
        reason: None,
    },
    ScoringRule {
        name: "price_above_sma_200",
        applies: |s| price_above(s, s.sma_200),
        delta: 1,
        reason: None,
    },
    ScoringRule {
        name: "above_all_moving_averages",
        applies: |s| {
            let (available, bullish) = ma_counts(s);
            available > 0 && bullish == available
        },
        delta: 0,
        reason: Some("Price above all available moving averages (bullish)"),
    },
    ScoringRule {
        name: "below_all_moving_averages",
        applies: |s| {
            let (available, bullish) = ma_counts(s);
            available > 0 && bullish == 0
        },
        delta: -2,
        reason: Some("Price below all available moving averages (bearish)"),
    },
    ScoringRule {
        name: "golden_cross",
        applies: |s| matches!((s.sma_50, s.sma_200), (Some(mid), Some(long)) if mid > long),
        delta: 1,
        reason: Some("Golden Cross pattern (SMA50 > SMA200)"),
    },
    ScoringRule {
        name: "death_cross",
        applies: |s| matches!((s.sma_50, s.sma_200), (Some(mid), Some(long)) if mid <= long),
        delta: -1,
        reason: Some("Death Cross pattern (SMA50 < SMA200)"),
    },
    ScoringRule {
        name: "below_lower_bollinger",
        applies: |s| matches!((s.current_price, s.bb_lower), (Some(p), Some(l)) if p < l),
        delta: 1,
        reason: Some("Price near lower Bollinger Band (potential bounce)"),
    },
    ScoringRule {
        name: "above_upper_bollinger",
        applies: |s| matches!((s.current_price, s.bb_upper), (Some(p), Some(u)) if p > u),
        delta: -1,
        reason: Some("Price near upper Bollinger Band (potential pullback)"),
    },
    ScoringRule {
        name: "stochastic_oversold",
        applies: |s| matches!((s.stoch_k, s.stoch_d), (Some(k), Some(d)) if k < 20.0 && d < 20.0),
        delta: 1,
        reason: Some("Stochastic indicates oversold"),
    },
    ScoringRule {
        name: "stochastic_overbought",
        applies: |s| matches!((s.stoch_k, s.stoch_d), (Some(k), Some(d)) if k > 80.0 && d > 80.0),
        delta: -1,
        reason: Some("Stochastic indicates overbought"),
    },
    ScoringRule {
        name: "strong_momentum_up",
        applies: |s| matches!(s.change_1d_pct, Some(c) if c > 2.0),
        delta: 1,
        reason: Some("Strong positive price momentum"),
    },
    ScoringRule {
        name: "strong_momentum_down",
        applies: |s| matches!(s.change_1d_pct, Some(c) if c < -2.0),
        delta: -1,
        reason: Some("Strong negative price momentum"),
    },
];
