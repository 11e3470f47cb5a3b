//! # Exchange Adapters
//!
//! Converts exchange-specific market and account payloads into one canonical
//! trading domain model.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Shared** — Currency/pair newtypes, pair resolution, decimal scaling, side
//!    classification, timestamp normalization
//! 2. **Domain** — Vertical slices (ticker, trade, order, account, user trade), each
//!    with wire types and pure conversion functions
//! 3. **Metadata** — Pair → price-scale tables consumed read-only by the adapters
//! 4. **Exchange** — Tagged per-exchange payloads and the configured `Adapter`
//!
//! Every adapter is a synchronous, side-effect-free function. Nothing here
//! performs I/O or keeps state between calls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exchange_adapters::prelude::*;
//!
//! let meta = ExchangeMetaData::anx()?;
//! let payload: UserTradesPayload = serde_json::from_str(body)?;
//! let fills = Adapter::default().user_trades(&payload, &meta)?;
//! ```

// ── Layer 1: Shared ──────────────────────────────────────────────────────────

/// Shared newtypes and leaf conversions.
pub mod shared;

/// Unified adapter error type.
pub mod error;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

// ── Layer 3: Metadata ────────────────────────────────────────────────────────

/// Exchange metadata and the price-scale lookup contract.
pub mod meta;

// ── Layer 4: Exchange front-end ──────────────────────────────────────────────

/// Adapter configuration.
pub mod config;

/// Tagged per-exchange payloads and the `Adapter` facade.
pub mod exchange;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + leaf conversions
    pub use crate::shared::{
        classify_side, compute_fill_price, percent_to_factor, resolve_pair,
        resolve_pair_from_code, Currency, CurrencyPair, Side, SideMatch, TradeSortType,
    };

    // Domain types
    pub use crate::domain::account::{AccountInfo, Balance, Wallet};
    pub use crate::domain::order::{LimitOrder, OrderBook};
    pub use crate::domain::ticker::Ticker;
    pub use crate::domain::trade::{Trade, Trades};
    pub use crate::domain::user_trade::{UserTrade, UserTrades};

    // Metadata
    pub use crate::meta::{ExchangeMetaData, PriceScaleLookup};

    // Front-end
    pub use crate::config::{AdapterConfig, SidePolicy};
    pub use crate::exchange::{
        AccountInfoPayload, Adapter, DepthPayload, ExchangeResult, OpenOrdersPayload,
        TickerPayload, TradesPayload, UserTradesPayload,
    };

    // Errors
    pub use crate::error::AdapterError;
}
