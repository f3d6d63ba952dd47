//! Yahoo-Finance-style HTTP market data provider.
//!
//! Talks to the v8 chart endpoint for bars and the v10 quoteSummary
//! endpoint for fundamentals. Transient failures (rate limits, 5xx,
//! transport) are retried with exponential backoff; everything else
//! surfaces immediately.

use crate::models::{bar::is_strictly_ordered, Bar, Fundamentals, Period};
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const MAX_RETRIES: usize = 3;

pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host, used by tests to mock
    /// the endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json(&self, url: String, symbol: &str) -> Result<Value, MarketDataError> {
        let response = self.client.get(&url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(MarketDataError::UnknownSymbol(symbol.to_string()))
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(MarketDataError::RateLimited),
            _ => {}
        }
        let response = response.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }

    async fn fetch_chart(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, MarketDataError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, period
        );
        let payload = self.get_json(url, symbol).await?;
        parse_chart(symbol, &payload)
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn fetch_bars(&self, symbol: &str, period: Period) -> Result<Vec<Bar>, MarketDataError> {
        let bars = (|| self.fetch_chart(symbol, period))
            .retry(ExponentialBuilder::default().with_max_times(MAX_RETRIES))
            .when(MarketDataError::is_transient)
            .await?;
        debug!(symbol, bars = bars.len(), %period, "fetched bar series");
        Ok(bars)
    }

    async fn fetch_fundamentals(&self, symbol: &str) -> Result<Fundamentals, MarketDataError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=summaryDetail,defaultKeyStatistics,financialData",
            self.base_url, symbol
        );
        let payload = self.get_json(url, symbol).await?;
        Ok(parse_fundamentals(&payload).normalized())
    }
}

fn parse_chart(symbol: &str, payload: &Value) -> Result<Vec<Bar>, MarketDataError> {
    let chart = &payload["chart"];
    if !chart["error"].is_null() {
        return Err(MarketDataError::UnknownSymbol(symbol.to_string()));
    }
    let result = chart["result"]
        .get(0)
        .ok_or_else(|| MarketDataError::Malformed("missing chart result".into()))?;

    let timestamps = result["timestamp"]
        .as_array()
        .ok_or_else(|| MarketDataError::Malformed("missing timestamp array".into()))?;
    let quote = result["indicators"]["quote"]
        .get(0)
        .ok_or_else(|| MarketDataError::Malformed("missing quote block".into()))?;

    let series = |field: &str| quote[field].as_array().cloned().unwrap_or_default();
    let opens = series("open");
    let highs = series("high");
    let lows = series("low");
    let closes = series("close");
    let volumes = series("volume");

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        // Rows with any null field (halts, partial sessions) are skipped.
        let row = (
            ts.as_i64(),
            opens.get(i).and_then(Value::as_f64),
            highs.get(i).and_then(Value::as_f64),
            lows.get(i).and_then(Value::as_f64),
            closes.get(i).and_then(Value::as_f64),
            volumes.get(i).and_then(Value::as_f64),
        );
        if let (Some(ts), Some(open), Some(high), Some(low), Some(close), Some(volume)) = row {
            let timestamp = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| MarketDataError::Malformed(format!("bad timestamp {ts}")))?;
            bars.push(Bar::new(open, high, low, close, volume, timestamp));
        }
    }

    if bars.is_empty() {
        return Err(MarketDataError::EmptySeries(symbol.to_string()));
    }
    if !is_strictly_ordered(&bars) {
        return Err(MarketDataError::Malformed(
            "bar timestamps not strictly increasing".into(),
        ));
    }
    Ok(bars)
}

fn parse_fundamentals(payload: &Value) -> Fundamentals {
    let result = &payload["quoteSummary"]["result"][0];
    let summary = &result["summaryDetail"];
    let stats = &result["defaultKeyStatistics"];
    let financial = &result["financialData"];

    let raw = |node: &Value, key: &str| node[key]["raw"].as_f64();

    Fundamentals {
        pe_ratio: raw(summary, "trailingPE"),
        forward_pe: raw(summary, "forwardPE").or_else(|| raw(stats, "forwardPE")),
        pb_ratio: raw(stats, "priceToBook"),
        dividend_yield: raw(summary, "dividendYield"),
        market_cap: raw(summary, "marketCap"),
        eps: raw(stats, "trailingEps"),
        revenue_growth: raw(financial, "revenueGrowth"),
        earnings_growth: raw(financial, "earningsGrowth"),
        debt_to_equity: raw(financial, "debtToEquity"),
        roe: raw(financial, "returnOnEquity"),
        profit_margin: raw(financial, "profitMargins"),
        week_52_high: raw(summary, "fiftyTwoWeekHigh"),
        week_52_low: raw(summary, "fiftyTwoWeekLow"),
        avg_volume: raw(summary, "averageVolume"),
        beta: raw(summary, "beta"),
    }
}
