//! Wire types for the ANX `money/info` account response.

use crate::domain::wire::AnxValue;
use crate::shared::serde_util::decimal_or_number;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A per-currency ANX wallet. ANX reports `null` for currencies the account
/// has never held, so wallets arrive as `Option<AnxWallet>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnxWallet {
    #[serde(rename = "Balance")]
    pub balance: AnxValue,
    #[serde(rename = "Available_Balance")]
    pub available_balance: AnxValue,
    #[serde(rename = "Daily_Withdrawal_Limit", default)]
    pub daily_withdrawal_limit: Option<AnxValue>,
    #[serde(rename = "Max_Withdraw", default)]
    pub max_withdraw: Option<AnxValue>,
    #[serde(rename = "Open_Orders", default)]
    pub open_orders: Option<AnxValue>,
    #[serde(rename = "Operations", default)]
    pub operations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnxAccountInfo {
    #[serde(rename = "Login")]
    pub login: String,
    /// Trading fee as a percentage (`0.6` means 0.6 %).
    #[serde(rename = "Trade_Fee", with = "decimal_or_number")]
    pub trade_fee: Decimal,
    #[serde(rename = "Rights", default)]
    pub rights: Vec<String>,
    #[serde(rename = "Wallets", default)]
    pub wallets: HashMap<String, Option<AnxWallet>>,
}
