use serde::{Deserialize, Serialize};

/// Point-in-time company fundamentals, passed through for display.
///
/// These values never participate in scoring. Providers deliver them in
/// inconsistent units; [`Fundamentals::normalized`] is the contract that
/// must hold before they reach any formatting layer: percentage-style
/// metrics scaled to [0, 100], everything rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_pe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pb_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earnings_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roe: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_52_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_52_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale a ratio-style percentage (0.153 -> 15.3) if it arrived as a
/// fraction; values already in percent form are left alone.
fn as_percent(value: f64) -> f64 {
    if value.abs() < 1.0 {
        round2(value * 100.0)
    } else {
        round2(value)
    }
}

impl Fundamentals {
    /// Apply the unit-normalization contract and round for display.
    pub fn normalized(mut self) -> Self {
        self.dividend_yield = self.dividend_yield.map(|v| {
            if v > 0.0 && v < 1.0 {
                round2(v * 100.0)
            } else {
                round2(v)
            }
        });
        self.revenue_growth = self.revenue_growth.map(as_percent);
        self.earnings_growth = self.earnings_growth.map(as_percent);
        self.roe = self.roe.map(as_percent);
        self.profit_margin = self.profit_margin.map(as_percent);

        self.pe_ratio = self.pe_ratio.map(round2);
        self.forward_pe = self.forward_pe.map(round2);
        self.pb_ratio = self.pb_ratio.map(round2);
        self.eps = self.eps.map(round2);
        self.debt_to_equity = self.debt_to_equity.map(round2);
        self.beta = self.beta.map(round2);
        self.week_52_high = self.week_52_high.map(round2);
        self.week_52_low = self.week_52_low.map(round2);
        self.avg_volume = self.avg_volume.map(round2);
        self
    }

    /// Human-readable market cap ("$2.75T", "$312.40B", "$85.10M").
    pub fn market_cap_display(&self) -> Option<String> {
        let cap = self.market_cap.filter(|c| *c > 0.0)?;
        let formatted = if cap >= 1e12 {
            format!("${:.2}T", cap / 1e12)
        } else if cap >= 1e9 {
            format!("${:.2}B", cap / 1e9)
        } else if cap >= 1e6 {
            format!("${:.2}M", cap / 1e6)
        } else {
            format!("${:.0}", cap)
        };
        Some(formatted)
    }
}
