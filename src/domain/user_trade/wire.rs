//! Wire types for ANX private trade results (`money/trade/list`).

use crate::shared::serde_util::{decimal_or_number, option_decimal_or_number, timestamp_ms};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fill of one of the account's orders.
///
/// `currency_pair` is a combined code (`"BTCUSD"`, `"DOGEBTC"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnxTradeResult {
    pub trade_id: String,
    pub order_id: String,
    #[serde(with = "timestamp_ms")]
    pub timestamp: DateTime<Utc>,
    #[serde(with = "decimal_or_number")]
    pub traded_currency_fill_amount: Decimal,
    #[serde(with = "decimal_or_number")]
    pub settlement_currency_fill_amount: Decimal,
    #[serde(default, with = "option_decimal_or_number")]
    pub settlement_currency_fill_amount_unrounded: Option<Decimal>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(rename = "ccyPair", alias = "currencyPair")]
    pub currency_pair: String,
    pub side: String,
}

/// REST response for the trade result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnxTradeResultsResponse {
    pub data: Vec<AnxTradeResult>,
}
