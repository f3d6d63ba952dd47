//! Unit tests for individual scoring rules

use stocklens::models::IndicatorSnapshot;
use stocklens::scoring::{ScoringRule, RULES};

fn rule(name: &str) -> &'static ScoringRule {
    RULES
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no rule named {name}"))
}

fn fires(name: &str, snapshot: &IndicatorSnapshot) -> bool {
    (rule(name).applies)(snapshot)
}

#[test]
fn test_rule_order_is_fixed() {
    let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec![
            "rsi_oversold",
            "rsi_overbought",
            "rsi_neutral_bullish",
            "rsi_neutral_bearish",
            "macd_bullish_crossover",
            "macd_bearish_crossover",
            "price_above_sma_20",
            "price_above_sma_50",
            "price_above_sma_200",
            "above_all_moving_averages",
            "below_all_moving_averages",
            "golden_cross",
            "death_cross",
            "below_lower_bollinger",
            "above_upper_bollinger",
            "stochastic_oversold",
            "stochastic_overbought",
            "strong_momentum_up",
            "strong_momentum_down",
        ]
    );
}

#[test]
fn test_rsi_branches_are_exclusive() {
    for rsi in [10.0, 30.0, 40.0, 50.0, 50.1, 70.0, 70.1, 95.0] {
        let snapshot = IndicatorSnapshot {
            rsi: Some(rsi),
            ..IndicatorSnapshot::default()
        };
        let fired = RULES
            .iter()
            .filter(|r| r.name.starts_with("rsi_") && (r.applies)(&snapshot))
            .count();
        assert_eq!(fired, 1, "rsi = {rsi}");
    }
}

#[test]
fn test_rsi_thresholds() {
    let snap = |rsi| IndicatorSnapshot {
        rsi: Some(rsi),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("rsi_oversold", &snap(29.9)));
    assert!(fires("rsi_neutral_bullish", &snap(30.0)));
    assert!(fires("rsi_neutral_bullish", &snap(50.0)));
    assert!(fires("rsi_neutral_bearish", &snap(50.1)));
    assert!(fires("rsi_neutral_bearish", &snap(70.0)));
    assert!(fires("rsi_overbought", &snap(70.1)));
}

#[test]
fn test_rsi_absent_skips_all_branches() {
    let snapshot = IndicatorSnapshot::default();
    assert!(RULES
        .iter()
        .filter(|r| r.name.starts_with("rsi_"))
        .all(|r| !(r.applies)(&snapshot)));
}

#[test]
fn test_macd_crossover_needs_matching_histogram() {
    let mut snapshot = IndicatorSnapshot {
        macd: Some(1.0),
        macd_signal: Some(0.5),
        macd_histogram: Some(0.5),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("macd_bullish_crossover", &snapshot));
    assert!(!fires("macd_bearish_crossover", &snapshot));

    // Line above signal but histogram non-positive: no crossover rule.
    snapshot.macd_histogram = Some(-0.1);
    assert!(!fires("macd_bullish_crossover", &snapshot));
    assert!(!fires("macd_bearish_crossover", &snapshot));
}

#[test]
fn test_per_ma_rules_score_without_reason() {
    for name in [
        "price_above_sma_20",
        "price_above_sma_50",
        "price_above_sma_200",
    ] {
        let r = rule(name);
        assert_eq!(r.delta, 1);
        assert!(r.reason.is_none());
    }
}

#[test]
fn test_ma_summary_rules() {
    // Above every available MA: reasoning line, no score delta.
    let above = IndicatorSnapshot {
        current_price: Some(110.0),
        sma_20: Some(100.0),
        sma_50: Some(90.0),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("above_all_moving_averages", &above));
    assert!(!fires("below_all_moving_averages", &above));
    assert_eq!(rule("above_all_moving_averages").delta, 0);

    // Below every available MA: reasoning line and -2.
    let below = IndicatorSnapshot {
        current_price: Some(80.0),
        sma_20: Some(100.0),
        sma_50: Some(90.0),
        sma_200: Some(95.0),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("below_all_moving_averages", &below));
    assert_eq!(rule("below_all_moving_averages").delta, -2);

    // Mixed: neither summary rule.
    let mixed = IndicatorSnapshot {
        current_price: Some(95.0),
        sma_20: Some(100.0),
        sma_50: Some(90.0),
        ..IndicatorSnapshot::default()
    };
    assert!(!fires("above_all_moving_averages", &mixed));
    assert!(!fires("below_all_moving_averages", &mixed));
}

#[test]
fn test_ma_summary_skips_when_no_ma_available() {
    let snapshot = IndicatorSnapshot {
        current_price: Some(100.0),
        ..IndicatorSnapshot::default()
    };
    assert!(!fires("above_all_moving_averages", &snapshot));
    assert!(!fires("below_all_moving_averages", &snapshot));
}

#[test]
fn test_golden_and_death_cross() {
    let golden = IndicatorSnapshot {
        sma_50: Some(110.0),
        sma_200: Some(100.0),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("golden_cross", &golden));
    assert!(!fires("death_cross", &golden));

    // Equal SMAs side with the death cross, as in the original rule.
    let equal = IndicatorSnapshot {
        sma_50: Some(100.0),
        sma_200: Some(100.0),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("death_cross", &equal));

    // One SMA missing: neither fires.
    let partial = IndicatorSnapshot {
        sma_50: Some(100.0),
        ..IndicatorSnapshot::default()
    };
    assert!(!fires("golden_cross", &partial));
    assert!(!fires("death_cross", &partial));
}

#[test]
fn test_bollinger_band_rules() {
    let snap = |price| IndicatorSnapshot {
        current_price: Some(price),
        bb_upper: Some(110.0),
        bb_lower: Some(90.0),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("below_lower_bollinger", &snap(89.0)));
    assert!(fires("above_upper_bollinger", &snap(111.0)));
    assert!(!fires("below_lower_bollinger", &snap(100.0)));
    assert!(!fires("above_upper_bollinger", &snap(100.0)));
}

#[test]
fn test_stochastic_rules_need_both_lines() {
    let oversold = IndicatorSnapshot {
        stoch_k: Some(10.0),
        stoch_d: Some(15.0),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("stochastic_oversold", &oversold));

    let split = IndicatorSnapshot {
        stoch_k: Some(10.0),
        stoch_d: Some(50.0),
        ..IndicatorSnapshot::default()
    };
    assert!(!fires("stochastic_oversold", &split));

    let overbought = IndicatorSnapshot {
        stoch_k: Some(90.0),
        stoch_d: Some(85.0),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("stochastic_overbought", &overbought));
}

#[test]
fn test_momentum_thresholds() {
    let snap = |change| IndicatorSnapshot {
        change_1d_pct: Some(change),
        ..IndicatorSnapshot::default()
    };
    assert!(fires("strong_momentum_up", &snap(2.1)));
    assert!(!fires("strong_momentum_up", &snap(2.0)));
    assert!(fires("strong_momentum_down", &snap(-2.1)));
    assert!(!fires("strong_momentum_down", &snap(-2.0)));
}
