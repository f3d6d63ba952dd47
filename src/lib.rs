//! Stocklens: deterministic technical analysis and trading
//! recommendations for stock symbols.
//!
//! The core is two pure components composed in sequence: the indicator
//! pipeline (`indicators`) turns an ordered bar series into a snapshot
//! of named indicator values, and the recommendation engine (`scoring`)
//! turns that snapshot into a scored, classified, explained
//! recommendation. Everything else (providers, HTTP API, CLI) is
//! orchestration around that pair.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod services;
