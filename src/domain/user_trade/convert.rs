//! Conversions: AnxTradeResult → UserTrade.

use super::wire::AnxTradeResult;
use super::{UserTrade, UserTrades};
use crate::error::AdapterError;
use crate::meta::PriceScaleLookup;
use crate::shared::{
    classify_side, compute_fill_price, resolve_pair_from_code, SideMatch, TradeSortType,
};

/// Adapt one fill. The price is settlement ÷ traded amount at the pair's
/// declared scale.
pub fn adapt_user_trade<L>(raw: &AnxTradeResult, meta: &L) -> Result<UserTrade, AdapterError>
where
    L: PriceScaleLookup + ?Sized,
{
    let currency_pair = resolve_pair_from_code(&raw.currency_pair)?;
    let price_scale = meta.scale_for(&currency_pair)?;
    let price = compute_fill_price(
        raw.settlement_currency_fill_amount,
        raw.traded_currency_fill_amount,
        price_scale,
    )?;

    Ok(UserTrade {
        side: classify_side(&raw.side, SideMatch::Exact),
        amount: raw.traded_currency_fill_amount,
        currency_pair,
        price,
        timestamp: raw.timestamp,
        id: raw.trade_id.clone(),
        order_id: raw.order_id.clone(),
        fee_amount: None,
        fee_currency: None,
    })
}

/// Adapt a list of fills. Fails as a whole on the first bad entry.
pub fn adapt_user_trades<L>(
    raw: &[AnxTradeResult],
    meta: &L,
) -> Result<UserTrades, AdapterError>
where
    L: PriceScaleLookup + ?Sized,
{
    let mut trades = Vec::with_capacity(raw.len());
    for result in raw {
        trades.push(adapt_user_trade(result, meta)?);
    }

    let most_recent_timestamp_of_first_element = raw
        .first()
        .map(|first| first.timestamp.timestamp_millis())
        .unwrap_or(0);
    tracing::trace!("Adapted {} user trade(s)", trades.len());

    Ok(UserTrades {
        trades,
        most_recent_timestamp_of_first_element,
        sort_type: TradeSortType::SortByTimestamp,
    })
}
