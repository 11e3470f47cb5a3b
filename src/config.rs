//! Adapter configuration.

use crate::error::AdapterError;
use serde::{Deserialize, Serialize};

/// What to do with side tokens that are neither the bid nor the ask marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidePolicy {
    /// Unknown tokens classify as the ask side, matching exchange behaviour.
    #[default]
    Lenient,
    /// Unknown tokens fail the whole adaptation with `UnknownSide`.
    Strict,
}

/// Configuration for [`crate::exchange::Adapter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub side_policy: SidePolicy,
}

impl AdapterConfig {
    /// Config that rejects unknown side tokens.
    pub fn strict() -> Self {
        Self {
            side_policy: SidePolicy::Strict,
        }
    }

    pub fn with_side_policy(mut self, side_policy: SidePolicy) -> Self {
        self.side_policy = side_policy;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, AdapterError> {
        serde_json::from_str(json).map_err(|e| AdapterError::Config(e.to_string()))
    }
}
