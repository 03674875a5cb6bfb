//! Error types for the volume-profile system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the volume-profile system.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (bad timezone string, invalid limits).
    #[error("Configuration error: {0}")]
    Config(String),

    /// No order book snapshot available for the symbol. Nothing can be
    /// classified without a bid/ask boundary, so analysis cannot proceed.
    #[error("No order book data available for {symbol}")]
    MissingOrderBook {
        /// Symbol the analysis was requested for.
        symbol: String,
    },

    /// Data error (invalid or missing data from a source).
    #[error("Data error: {0}")]
    Data(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a missing-order-book error.
    pub fn missing_order_book(symbol: impl Into<String>) -> Self {
        Error::MissingOrderBook {
            symbol: symbol.into(),
        }
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }
}
