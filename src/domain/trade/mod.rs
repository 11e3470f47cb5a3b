//! Trade domain — public trade executions and trade history.

mod convert;
pub mod wire;

pub use convert::{adapt_trade, adapt_trades};

use crate::shared::{CurrencyPair, Side, TradeSortType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A public trade execution record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub side: Side,
    pub amount: Decimal,
    pub currency_pair: CurrencyPair,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

/// Trade history in exchange order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trades {
    pub trades: Vec<Trade>,
    /// Highest numeric trade id in `trades`, 0 when empty.
    pub latest_trade_id: i64,
    pub sort_type: TradeSortType,
}

impl Trades {
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trade> {
        self.trades.iter()
    }
}
