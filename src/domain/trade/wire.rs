//! Wire types for ANX public trade history.

use crate::shared::serde_util::{decimal_or_number, i64_or_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of the ANX `money/trade/fetch` list.
///
/// `tid` doubles as the trade's epoch-millis timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnxTrade {
    #[serde(with = "i64_or_string")]
    pub tid: i64,
    #[serde(with = "decimal_or_number")]
    pub amount: Decimal,
    #[serde(with = "decimal_or_number")]
    pub price: Decimal,
    pub item: String,
    pub price_currency: String,
    pub trade_type: String,
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub properties: Option<String>,
}

/// REST response for the trade history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnxTradesResponse {
    pub data: Vec<AnxTrade>,
}
