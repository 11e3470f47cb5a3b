//! Per-exchange front-end.
//!
//! Payloads arrive tagged with the exchange that produced them:
//!
//! ```json
//! { "exchange": "anx", "payload": { ... } }
//! ```
//!
//! [`Adapter`] dispatches each variant to the shared entity adapters in
//! [`crate::domain`], applying the configured side-token policy first.

pub mod envelope;

pub use envelope::ExchangeResult;

use crate::config::{AdapterConfig, SidePolicy};
use crate::domain::account::wire::AnxAccountInfo;
use crate::domain::account::{self, AccountInfo};
use crate::domain::order::wire::{AnxDepth, AnxOpenOrder};
use crate::domain::order::{self, LimitOrder, OrderBook};
use crate::domain::ticker::wire::AnxTicker;
use crate::domain::ticker::{self, Ticker};
use crate::domain::trade::wire::AnxTrade;
use crate::domain::trade::{self, Trades};
use crate::domain::user_trade::wire::AnxTradeResult;
use crate::domain::user_trade::{self, UserTrades};
use crate::error::AdapterError;
use crate::meta::PriceScaleLookup;
use crate::shared::{classify_side_strict, SideMatch};
use serde::{Deserialize, Serialize};

// ─── Payloads ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "exchange", content = "payload", rename_all = "lowercase")]
pub enum TickerPayload {
    Anx(AnxTicker),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "exchange", content = "payload", rename_all = "lowercase")]
pub enum TradesPayload {
    Anx(Vec<AnxTrade>),
}

/// A depth snapshot plus the pair it was requested for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "exchange", content = "payload", rename_all = "lowercase")]
pub enum DepthPayload {
    Anx {
        traded: String,
        counter: String,
        depth: AnxDepth,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "exchange", content = "payload", rename_all = "lowercase")]
pub enum OpenOrdersPayload {
    Anx(Vec<AnxOpenOrder>),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "exchange", content = "payload", rename_all = "lowercase")]
pub enum AccountInfoPayload {
    Anx(AnxAccountInfo),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "exchange", content = "payload", rename_all = "lowercase")]
pub enum UserTradesPayload {
    Anx(Vec<AnxTradeResult>),
}

// ─── Adapter ─────────────────────────────────────────────────────────────────

/// Configured entry point over the tagged payloads.
#[derive(Debug, Clone, Default)]
pub struct Adapter {
    config: AdapterConfig,
}

impl Adapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn ticker(&self, payload: &TickerPayload) -> Result<Ticker, AdapterError> {
        match payload {
            TickerPayload::Anx(raw) => ticker::adapt_ticker(raw),
        }
    }

    pub fn trades(&self, payload: &TradesPayload) -> Result<Trades, AdapterError> {
        match payload {
            TradesPayload::Anx(raw) => {
                self.check_sides(raw.iter().map(|t| t.trade_type.as_str()), SideMatch::Exact)?;
                trade::adapt_trades(raw)
            }
        }
    }

    pub fn order_book(&self, payload: &DepthPayload) -> Result<OrderBook, AdapterError> {
        match payload {
            DepthPayload::Anx {
                traded,
                counter,
                depth,
            } => order::adapt_order_book(depth, traded, counter),
        }
    }

    pub fn open_orders(&self, payload: &OpenOrdersPayload) -> Result<Vec<LimitOrder>, AdapterError> {
        match payload {
            OpenOrdersPayload::Anx(raw) => {
                self.check_sides(
                    raw.iter().map(|o| o.order_type.as_str()),
                    SideMatch::IgnoreCase,
                )?;
                order::adapt_open_orders(raw)
            }
        }
    }

    pub fn account_info(&self, payload: &AccountInfoPayload) -> AccountInfo {
        match payload {
            AccountInfoPayload::Anx(raw) => account::adapt_account_info(raw),
        }
    }

    pub fn user_trades<L>(
        &self,
        payload: &UserTradesPayload,
        meta: &L,
    ) -> Result<UserTrades, AdapterError>
    where
        L: PriceScaleLookup + ?Sized,
    {
        match payload {
            UserTradesPayload::Anx(raw) => {
                self.check_sides(raw.iter().map(|r| r.side.as_str()), SideMatch::Exact)?;
                user_trade::adapt_user_trades(raw, meta)
            }
        }
    }

    fn check_sides<'a>(
        &self,
        tokens: impl IntoIterator<Item = &'a str>,
        mode: SideMatch,
    ) -> Result<(), AdapterError> {
        if self.config.side_policy == SidePolicy::Lenient {
            return Ok(());
        }
        for token in tokens {
            if let Err(e) = classify_side_strict(token, mode) {
                tracing::warn!("Rejecting payload with unknown side token {:?}", token);
                return Err(e);
            }
        }
        Ok(())
    }
}
