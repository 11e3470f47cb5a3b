//! Conversions: ANX depth levels and open orders → LimitOrder.

use super::wire::{AnxDepth, AnxOpenOrder, AnxOrder};
use super::{LimitOrder, OrderBook};
use crate::error::AdapterError;
use crate::shared::side::{SIDE_ASK, SIDE_BID};
use crate::shared::{classify_side, resolve_pair, time, SideMatch};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Build a single limit order. The side token is matched ignoring case.
pub fn adapt_order(
    amount: Decimal,
    price: Decimal,
    traded: &str,
    counter: &str,
    side_token: &str,
    id: Option<&str>,
    timestamp: DateTime<Utc>,
) -> LimitOrder {
    LimitOrder {
        side: classify_side(side_token, SideMatch::IgnoreCase),
        amount,
        currency_pair: resolve_pair(traded, counter),
        id: id.map(str::to_string),
        timestamp,
        limit_price: price,
    }
}

/// Adapt one side of a depth snapshot. Pair, side and id are shared by all levels.
pub fn adapt_orders(
    raw: &[AnxOrder],
    traded: &str,
    counter: &str,
    side_token: &str,
    id: Option<&str>,
) -> Result<Vec<LimitOrder>, AdapterError> {
    let mut orders = Vec::with_capacity(raw.len());
    for level in raw {
        orders.push(adapt_order(
            level.amount,
            level.price,
            traded,
            counter,
            side_token,
            id,
            time::from_millis(level.stamp)?,
        ));
    }
    Ok(orders)
}

/// Adapt an open-order listing; every entry carries its own pair, side and id.
pub fn adapt_open_orders(raw: &[AnxOpenOrder]) -> Result<Vec<LimitOrder>, AdapterError> {
    let mut orders = Vec::with_capacity(raw.len());
    for order in raw {
        orders.push(adapt_order(
            order.amount.value,
            order.price.value,
            &order.item,
            &order.currency,
            &order.order_type,
            Some(order.oid.as_str()),
            time::from_millis(order.date)?,
        ));
    }
    Ok(orders)
}

/// Adapt a full depth snapshot for `traded`/`counter`.
pub fn adapt_order_book(
    raw: &AnxDepth,
    traded: &str,
    counter: &str,
) -> Result<OrderBook, AdapterError> {
    let asks = adapt_orders(&raw.asks, traded, counter, SIDE_ASK, None)?;
    let bids = adapt_orders(&raw.bids, traded, counter, SIDE_BID, None)?;
    tracing::trace!(
        "Adapted {}/{} depth: {} ask(s), {} bid(s)",
        traded,
        counter,
        asks.len(),
        bids.len()
    );

    Ok(OrderBook {
        timestamp: time::from_micros_truncated(raw.now)?,
        asks,
        bids,
    })
}
