//! Market data provider interface.

use crate::models::{Bar, Fundamentals, Period};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("rate limited by data provider")]
    RateLimited,
    #[error("no bars returned for {0}")]
    EmptySeries(String),
    #[error("malformed provider response: {0}")]
    Malformed(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether a retry could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            MarketDataError::RateLimited | MarketDataError::Transport(_)
        )
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch daily bars for a symbol, ordered oldest first with
    /// strictly increasing timestamps.
    async fn fetch_bars(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, MarketDataError>;

    /// Fetch point-in-time fundamentals, already normalized per the
    /// display contract. Providers without fundamentals return the
    /// empty set.
    async fn fetch_fundamentals(&self, _symbol: &str) -> Result<Fundamentals, MarketDataError> {
        Ok(Fundamentals::default())
    }
}
