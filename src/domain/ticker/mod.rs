//! Ticker domain — top-of-book and daily statistics for one pair.

mod convert;
pub mod wire;

pub use convert::adapt_ticker;

use crate::shared::CurrencyPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticker {
    pub currency_pair: CurrencyPair,
    pub last: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl Ticker {
    /// Bid/ask spread.
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}
