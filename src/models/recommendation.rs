use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete recommendation class, ordered from most bearish to most bullish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    StrongSell,
    Sell,
    Hold,
    Buy,
    StrongBuy,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::StrongSell => "STRONG_SELL",
            Classification::Sell => "SELL",
            Classification::Hold => "HOLD",
            Classification::Buy => "BUY",
            Classification::StrongBuy => "STRONG_BUY",
        }
    }

    pub fn is_buy(self) -> bool {
        matches!(self, Classification::Buy | Classification::StrongBuy)
    }

    pub fn is_sell(self) -> bool {
        matches!(self, Classification::Sell | Classification::StrongSell)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored, classified, explained output of the recommendation engine.
///
/// `reasoning` holds one entry per rule that fired, in rule-evaluation
/// order. The order is part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub score: i32,
    pub classification: Classification,
    pub reasoning: Vec<String>,
}
