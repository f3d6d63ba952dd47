//! Per-symbol analysis orchestration and portfolio scanning.
//!
//! Composes the collaborators in strict sequence: fetch bars, enforce
//! the caller-side history floor, run the indicator pipeline, score the
//! snapshot. Fundamentals are fetched best-effort and never block a
//! recommendation.

use crate::indicators::{compute_snapshot, IndicatorError};
use crate::models::{Classification, Fundamentals, IndicatorSnapshot, Period, Recommendation};
use crate::scoring::RecommendationEngine;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Upstream fetch parallelism for portfolio scans.
const MAX_CONCURRENT_FETCHES: usize = 4;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("insufficient history for {symbol}: {got} bars, need at least {need}")]
    InsufficientHistory {
        symbol: String,
        got: usize,
        need: usize,
    },
    #[error(transparent)]
    Indicator(#[from] IndicatorError),
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

/// Full analysis result for one symbol. The snapshot is rounded to 2
/// decimal places for display; scoring ran on the unrounded values.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub bars: usize,
    pub snapshot: IndicatorSnapshot,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fundamentals: Option<Fundamentals>,
}

/// Compact per-symbol row for portfolio tables.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioEntry {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_1d_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    pub score: i32,
    pub classification: Classification,
    pub reasoning: Vec<String>,
}

impl From<&AnalysisReport> for PortfolioEntry {
    fn from(report: &AnalysisReport) -> Self {
        Self {
            symbol: report.symbol.clone(),
            price: report.snapshot.current_price,
            change_1d_pct: report.snapshot.change_1d_pct,
            rsi: report.snapshot.rsi,
            score: report.recommendation.score,
            classification: report.recommendation.classification,
            reasoning: report.recommendation.reasoning.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub total_analyzed: usize,
    pub buy_count: usize,
    pub sell_count: usize,
    pub hold_count: usize,
    pub avg_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest: Option<PortfolioEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest: Option<PortfolioEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport {
    /// Buy-side entries, best score first, capped at top_n.
    pub buy: Vec<PortfolioEntry>,
    /// Sell-side entries, worst score first, capped at top_n.
    pub sell: Vec<PortfolioEntry>,
    pub hold: Vec<PortfolioEntry>,
    pub failed: Vec<String>,
    pub summary: PortfolioSummary,
}

pub struct AnalysisService {
    provider: Arc<dyn MarketDataProvider>,
    min_bars: usize,
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, min_bars: usize) -> Self {
        Self { provider, min_bars }
    }

    /// Analyze one symbol end to end.
    pub async fn analyze(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<AnalysisReport, AnalysisError> {
        let symbol = symbol.trim().to_uppercase();
        let bars = self.provider.fetch_bars(&symbol, period).await?;
        if bars.len() < self.min_bars {
            return Err(AnalysisError::InsufficientHistory {
                symbol,
                got: bars.len(),
                need: self.min_bars,
            });
        }

        let snapshot = compute_snapshot(&symbol, &bars)?;
        let recommendation = RecommendationEngine::recommend(&snapshot);

        let fundamentals = match self.provider.fetch_fundamentals(&symbol).await {
            Ok(f) => Some(f),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "fundamentals unavailable, continuing without");
                None
            }
        };

        info!(
            symbol = %symbol,
            score = recommendation.score,
            classification = %recommendation.classification,
            "analysis complete"
        );

        Ok(AnalysisReport {
            symbol,
            bars: bars.len(),
            snapshot: snapshot.rounded(),
            recommendation,
            fundamentals,
        })
    }

    /// Analyze a list of symbols concurrently and bucket the results.
    ///
    /// Duplicates are removed preserving first occurrence. Failed
    /// symbols are reported, never fatal.
    pub async fn analyze_portfolio(
        &self,
        symbols: &[String],
        period: Period,
        top_n: usize,
    ) -> PortfolioReport {
        let symbols = dedup_preserving_order(symbols);

        let outcomes: Vec<(String, Result<AnalysisReport, AnalysisError>)> =
            stream::iter(symbols.into_iter())
                .map(|symbol| async move {
                    let outcome = self.analyze(&symbol, period).await;
                    (symbol, outcome)
                })
                .buffered(MAX_CONCURRENT_FETCHES)
                .collect()
                .await;

        let mut reports = Vec::new();
        let mut failed = Vec::new();
        for (symbol, outcome) in outcomes {
            match outcome {
                Ok(report) => reports.push(report),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "skipping symbol");
                    failed.push(symbol);
                }
            }
        }

        let mut entries: Vec<PortfolioEntry> = reports.iter().map(PortfolioEntry::from).collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));

        let buy: Vec<PortfolioEntry> = entries
            .iter()
            .filter(|e| e.classification.is_buy())
            .take(top_n)
            .cloned()
            .collect();
        let mut sell: Vec<PortfolioEntry> = entries
            .iter()
            .filter(|e| e.classification.is_sell())
            .cloned()
            .collect();
        sell.sort_by(|a, b| a.score.cmp(&b.score));
        sell.truncate(top_n);
        let hold: Vec<PortfolioEntry> = entries
            .iter()
            .filter(|e| e.classification == Classification::Hold)
            .cloned()
            .collect();

        let buy_count = entries.iter().filter(|e| e.classification.is_buy()).count();
        let sell_count = entries
            .iter()
            .filter(|e| e.classification.is_sell())
            .count();
        let avg_score = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.score as f64).sum::<f64>() / entries.len() as f64
        };

        let summary = PortfolioSummary {
            total_analyzed: entries.len(),
            buy_count,
            sell_count,
            hold_count: hold.len(),
            avg_score,
            highest: entries.first().cloned(),
            lowest: entries.last().cloned(),
        };

        PortfolioReport {
            buy,
            sell,
            hold,
            failed,
            summary,
        }
    }
}

fn dedup_preserving_order(symbols: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    symbols
        .iter()
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}
