//! Unified adapter error types.

use crate::shared::CurrencyPair;
use thiserror::Error;

/// Top-level adapter error.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Unrecognized currency pair {0}")]
    MalformedCurrencyPair(String),

    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    #[error("Overflow: {context}")]
    Overflow { context: String },

    #[error("No price scale declared for {0}")]
    UnknownPairScale(CurrencyPair),

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("Unknown side token: {0:?}")]
    UnknownSide(String),

    #[error("Exchange returned errors: {}", .0.join(", "))]
    Exchange(Vec<String>),

    #[error("Exchange response carried neither a result nor an error")]
    MissingResult,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl AdapterError {
    pub fn is_malformed_pair(&self) -> bool {
        matches!(self, AdapterError::MalformedCurrencyPair(_))
    }
}
