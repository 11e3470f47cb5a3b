//! User trade domain — the account's own fills.

mod convert;
pub mod wire;

pub use convert::{adapt_user_trade, adapt_user_trades};

use crate::shared::{Currency, CurrencyPair, Side, TradeSortType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fill of one of the account's orders.
///
/// Fees are not part of a trade result; they come from the wallet history and
/// are left unset here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserTrade {
    pub side: Side,
    /// Filled amount in the traded currency.
    pub amount: Decimal,
    pub currency_pair: CurrencyPair,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub id: String,
    pub order_id: String,
    pub fee_amount: Option<Decimal>,
    pub fee_currency: Option<Currency>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserTrades {
    pub trades: Vec<UserTrade>,
    /// Epoch millis of the *first* trade in `trades`, 0 when empty. This is a
    /// timestamp, not a trade id, and not a maximum.
    pub most_recent_timestamp_of_first_element: i64,
    pub sort_type: TradeSortType,
}

impl UserTrades {
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
