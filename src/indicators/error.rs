use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// The bar series was empty; nothing can be computed. A short but
    /// non-empty series is not an error, it produces a snapshot with
    /// absent fields.
    #[error("insufficient data for {symbol}: empty bar series")]
    InsufficientData { symbol: String },
}
