//! HTTP endpoint server using Axum

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::models::Period;
use crate::services::analysis::AnalysisService;
use crate::services::market_data::MarketDataError;
use crate::services::AnalysisError;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AnalysisService>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(service: Arc<AnalysisService>) -> Self {
        Self {
            service,
            start_time: Arc::new(Instant::now()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
    #[serde(default)]
    pub period: Option<Period>,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioRequest {
    pub symbols: Vec<String>,
    #[serde(default)]
    pub period: Option<Period>,
    #[serde(default)]
    pub top_n: Option<usize>,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message })),
    )
}

fn error_response(err: AnalysisError) -> ApiError {
    let status = match &err {
        AnalysisError::MarketData(
            MarketDataError::UnknownSymbol(_) | MarketDataError::EmptySeries(_),
        ) => StatusCode::NOT_FOUND,
        AnalysisError::MarketData(_) => StatusCode::BAD_GATEWAY,
        AnalysisError::InsufficientHistory { .. } | AnalysisError::Indicator(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Json(json!({
        "status": "healthy",
        "uptime_seconds": uptime_seconds,
        "service": "stocklens-analysis-engine"
    }))
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, ApiError> {
    let symbol = request.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(bad_request("stock symbol is required"));
    }
    let period = request.period.unwrap_or_default();

    let report = state
        .service
        .analyze(&symbol, period)
        .await
        .map_err(error_response)?;

    Ok(Json(json!({
        "success": true,
        "symbol": report.symbol,
        "bars": report.bars,
        "snapshot": report.snapshot,
        "recommendation": report.recommendation,
        "fundamentals": report.fundamentals,
    })))
}

pub async fn analyze_portfolio(
    State(state): State<AppState>,
    Json(request): Json<PortfolioRequest>,
) -> Result<Json<Value>, ApiError> {
    if request.symbols.iter().all(|s| s.trim().is_empty()) {
        return Err(bad_request("at least one stock symbol is required"));
    }
    let period = request.period.unwrap_or_default();
    let top_n = request.top_n.unwrap_or(10);

    let report = state
        .service
        .analyze_portfolio(&request.symbols, period, top_n)
        .await;

    if report.summary.total_analyzed == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "no symbols were successfully analyzed",
                "failed": report.failed,
            })),
        ));
    }

    Ok(Json(json!({
        "success": true,
        "portfolio": report,
    })))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/analyze", post(analyze))
        .route("/analyze/portfolio", post(analyze_portfolio))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    service: Arc<AnalysisService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = build_router(AppState::new(service));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port, "HTTP server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
