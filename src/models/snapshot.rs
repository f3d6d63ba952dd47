use serde::{Deserialize, Serialize};

/// Point-in-time summary of every computed indicator for one symbol.
///
/// Each field is present iff the bar series met the indicator's minimum
/// length. Absence is a first-class state: the recommendation engine skips
/// rules whose inputs are `None`, it never substitutes a default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_1d_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_1w_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_1m_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_6m_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_1y_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_histogram: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_12: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ema_26: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoch_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoch_d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_middle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obv: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl IndicatorSnapshot {
    /// True when no field at all was computed.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|f| f.is_none())
    }

    /// Snapshot with every present value rounded to 2 decimal places,
    /// for display and API responses. Scoring always runs on the
    /// unrounded snapshot.
    pub fn rounded(&self) -> Self {
        Self {
            current_price: self.current_price.map(round2),
            previous_close: self.previous_close.map(round2),
            change_1d_pct: self.change_1d_pct.map(round2),
            change_1w_pct: self.change_1w_pct.map(round2),
            change_1m_pct: self.change_1m_pct.map(round2),
            change_6m_pct: self.change_6m_pct.map(round2),
            change_1y_pct: self.change_1y_pct.map(round2),
            macd: self.macd.map(round2),
            macd_signal: self.macd_signal.map(round2),
            macd_histogram: self.macd_histogram.map(round2),
            sma_20: self.sma_20.map(round2),
            sma_50: self.sma_50.map(round2),
            sma_200: self.sma_200.map(round2),
            ema_12: self.ema_12.map(round2),
            ema_26: self.ema_26.map(round2),
            rsi: self.rsi.map(round2),
            stoch_k: self.stoch_k.map(round2),
            stoch_d: self.stoch_d.map(round2),
            bb_upper: self.bb_upper.map(round2),
            bb_middle: self.bb_middle.map(round2),
            bb_lower: self.bb_lower.map(round2),
            atr: self.atr.map(round2),
            obv: self.obv.map(round2),
        }
    }

    /// The three simple moving averages, longest last.
    pub fn moving_averages(&self) -> [Option<f64>; 3] {
        [self.sma_20, self.sma_50, self.sma_200]
    }

    fn fields(&self) -> [Option<f64>; 23] {
        [
            self.current_price,
            self.previous_close,
            self.change_1d_pct,
            self.change_1w_pct,
            self.change_1m_pct,
            self.change_6m_pct,
            self.change_1y_pct,
            self.macd,
            self.macd_signal,
            self.macd_histogram,
            self.sma_20,
            self.sma_50,
            self.sma_200,
            self.ema_12,
            self.ema_26,
            self.rsi,
            self.stoch_k,
            self.stoch_d,
            self.bb_upper,
            self.bb_middle,
            self.bb_lower,
            self.atr,
            self.obv,
        ]
    }
}
