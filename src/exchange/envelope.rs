//! Result envelope used by REST APIs that wrap every payload as
//! `{"error": [...], "result": ...}`.

use crate::error::AdapterError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeResult<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Vec<String>,
}

impl<T> ExchangeResult<T> {
    pub fn new(result: Option<T>, error: Vec<String>) -> Self {
        Self { result, error }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }

    /// Unwrap the payload. Any reported error wins over a present result.
    pub fn into_result(self) -> Result<T, AdapterError> {
        if !self.error.is_empty() {
            tracing::warn!("Exchange reported error(s): {:?}", self.error);
            return Err(AdapterError::Exchange(self.error));
        }
        self.result.ok_or(AdapterError::MissingResult)
    }
}
