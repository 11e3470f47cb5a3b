//! Conversions from ANX trade wire types to domain trades.

use super::wire::AnxTrade;
use super::{Trade, Trades};
use crate::error::AdapterError;
use crate::shared::{classify_side, resolve_pair, time, SideMatch, TradeSortType};

/// Adapt one public trade. The trade id is read as the epoch-millis timestamp.
pub fn adapt_trade(raw: &AnxTrade) -> Result<Trade, AdapterError> {
    Ok(Trade {
        side: classify_side(&raw.trade_type, SideMatch::Exact),
        amount: raw.amount,
        currency_pair: resolve_pair(&raw.item, &raw.price_currency),
        price: raw.price,
        timestamp: time::from_millis(raw.tid)?,
        id: raw.tid.to_string(),
    })
}

/// Adapt a trade list, keeping input order and tracking the highest trade id.
pub fn adapt_trades(raw: &[AnxTrade]) -> Result<Trades, AdapterError> {
    let mut trades = Vec::with_capacity(raw.len());
    let mut latest_trade_id = 0i64;
    for anx_trade in raw {
        latest_trade_id = latest_trade_id.max(anx_trade.tid);
        trades.push(adapt_trade(anx_trade)?);
    }
    tracing::trace!("Adapted {} trade(s), latest tid {}", trades.len(), latest_trade_id);

    Ok(Trades {
        trades,
        latest_trade_id,
        sort_type: TradeSortType::SortById,
    })
}

impl TryFrom<AnxTrade> for Trade {
    type Error = AdapterError;

    fn try_from(raw: AnxTrade) -> Result<Self, Self::Error> {
        adapt_trade(&raw)
    }
}

impl TryFrom<Vec<AnxTrade>> for Trades {
    type Error = AdapterError;

    fn try_from(raw: Vec<AnxTrade>) -> Result<Self, Self::Error> {
        adapt_trades(&raw)
    }
}
