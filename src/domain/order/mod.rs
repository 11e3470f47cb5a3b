//! Order domain — limit orders from depth snapshots and open-order listings.

mod convert;
pub mod wire;

pub use convert::{adapt_open_orders, adapt_order, adapt_order_book, adapt_orders};

use crate::shared::{CurrencyPair, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── LimitOrder ──────────────────────────────────────────────────────────────

/// A resting limit order.
///
/// Depth-snapshot levels carry no `id`; open-order listings always do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitOrder {
    pub side: Side,
    pub amount: Decimal,
    pub currency_pair: CurrencyPair,
    pub id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub limit_price: Decimal,
}

// ─── OrderBook ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    pub timestamp: DateTime<Utc>,
    pub asks: Vec<LimitOrder>,
    pub bids: Vec<LimitOrder>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.iter().map(|o| o.limit_price).max()
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.iter().map(|o| o.limit_price).min()
    }
}
