//! External collaborators: data providers and orchestration.

pub mod analysis;
pub mod market_data;
pub mod yahoo;

pub use analysis::{AnalysisError, AnalysisReport, AnalysisService, PortfolioReport};
pub use market_data::{MarketDataError, MarketDataProvider};
pub use yahoo::YahooFinanceProvider;
