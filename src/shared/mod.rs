//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: currencies serialize as bare codes
//! and pairs as `"BASE/COUNTER"` strings, so they can be used directly as JSON map
//! keys in metadata tables and wire types.

pub mod pair;
pub mod scaling;
pub mod serde_util;
pub mod side;
pub mod time;

pub use pair::{resolve_pair, resolve_pair_from_code};
pub use scaling::{compute_fill_price, percent_to_factor};
pub use side::{classify_side, classify_side_strict, SideMatch};

use crate::error::AdapterError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Currency ────────────────────────────────────────────────────────────────

/// Newtype for currency codes (e.g. `"BTC"`, `"USD"`, `"DOGE"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Currency(s))
    }
}

// ─── CurrencyPair ────────────────────────────────────────────────────────────

/// A tradable market: `base` priced in `counter`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyPair {
    pub base: Currency,
    pub counter: Currency,
}

impl CurrencyPair {
    pub fn new(base: impl Into<Currency>, counter: impl Into<Currency>) -> Self {
        Self {
            base: base.into(),
            counter: counter.into(),
        }
    }

    pub fn doge_btc() -> Self {
        Self::new("DOGE", "BTC")
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

impl FromStr for CurrencyPair {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, counter))
                if !base.is_empty() && !counter.is_empty() && !counter.contains('/') =>
            {
                Ok(CurrencyPair::new(base, counter))
            }
            _ => Err(AdapterError::MalformedCurrencyPair(s.to_string())),
        }
    }
}

impl Serialize for CurrencyPair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CurrencyPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CurrencyPair::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order side: Bid (buy) or Ask (sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "Buy"),
            Side::Ask => write!(f, "Sell"),
        }
    }
}

// ─── TradeSortType ───────────────────────────────────────────────────────────

/// Declared ordering of a trade collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSortType {
    SortByTimestamp,
    SortById,
}
