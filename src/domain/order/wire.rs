//! Wire types for ANX depth snapshots and open-order listings.

use crate::domain::wire::AnxValue;
use crate::shared::serde_util::{decimal_or_number, i64_or_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single depth level. Side, pair and id are implied by the enclosing list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnxOrder {
    #[serde(with = "decimal_or_number")]
    pub price: Decimal,
    #[serde(with = "decimal_or_number")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_int: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_int: Option<String>,
    /// Epoch millis.
    #[serde(with = "i64_or_string")]
    pub stamp: i64,
}

/// ANX `money/depth/full` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnxDepth {
    /// Epoch microseconds.
    #[serde(with = "i64_or_string")]
    pub now: i64,
    #[serde(default = "Vec::new")]
    pub asks: Vec<AnxOrder>,
    #[serde(default = "Vec::new")]
    pub bids: Vec<AnxOrder>,
}

/// One entry of the ANX `money/orders` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnxOpenOrder {
    pub oid: String,
    pub currency: String,
    pub item: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub amount: AnxValue,
    #[serde(default)]
    pub effective_amount: Option<AnxValue>,
    pub price: AnxValue,
    #[serde(default)]
    pub status: Option<String>,
    /// Epoch millis.
    #[serde(with = "i64_or_string")]
    pub date: i64,
}
