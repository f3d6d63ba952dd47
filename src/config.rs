//! Environment-based configuration.

use crate::models::Period;
use std::env;

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("STOCKLENS_ENV")
        .or_else(|_| env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub data_base_url: String,
    /// Caller-side floor on series length before analysis runs. The
    /// pipeline itself tolerates any non-empty series.
    pub min_bars: usize,
    pub default_period: Period,
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 8080,
            data_base_url: "https://query1.finance.yahoo.com".to_string(),
            min_bars: 50,
            default_period: Period::OneYear,
            top_n: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            http_port: env_parse("PORT").unwrap_or(defaults.http_port),
            data_base_url: env::var("DATA_BASE_URL").unwrap_or(defaults.data_base_url),
            min_bars: env_parse("MIN_BARS").unwrap_or(defaults.min_bars),
            default_period: env::var("DEFAULT_PERIOD")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.default_period),
            top_n: env_parse("TOP_N").unwrap_or(defaults.top_n),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
