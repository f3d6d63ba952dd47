//! Stocklens API Server
//!
//! HTTP API with health check and analysis endpoints. The service is
//! stateless and can be horizontally scaled; the CLI runs as a
//! separate binary.

use dotenvy::dotenv;
use std::sync::Arc;
use stocklens::config::Config;
use stocklens::core::http::start_server;
use stocklens::logging;
use stocklens::services::{AnalysisService, YahooFinanceProvider};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let env = stocklens::config::get_environment();
    info!("Starting Stocklens API Server");
    info!(environment = %env, "Environment");
    info!(port = config.http_port, "HTTP Server: http://0.0.0.0:{}", config.http_port);

    let provider = Arc::new(YahooFinanceProvider::with_base_url(
        config.data_base_url.clone(),
    ));
    let service = Arc::new(AnalysisService::new(provider, config.min_bars));

    let port = config.http_port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, service).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
