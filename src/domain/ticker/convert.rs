//! Conversion: AnxTicker → Ticker.

use super::wire::AnxTicker;
use super::Ticker;
use crate::error::AdapterError;
use crate::shared::{resolve_pair, time};

/// Adapt an ANX ticker.
///
/// The pair comes from the volume's currency (traded) and the average price's
/// currency (counter), which is how ANX labels the two legs.
pub fn adapt_ticker(raw: &AnxTicker) -> Result<Ticker, AdapterError> {
    Ok(Ticker {
        currency_pair: resolve_pair(&raw.vol.currency, &raw.avg.currency),
        last: raw.last.value,
        bid: raw.buy.value,
        ask: raw.sell.value,
        high: raw.high.value,
        low: raw.low.value,
        volume: raw.vol.value,
        timestamp: time::from_micros_truncated(raw.now)?,
    })
}

impl TryFrom<AnxTicker> for Ticker {
    type Error = AdapterError;

    fn try_from(raw: AnxTicker) -> Result<Self, Self::Error> {
        adapt_ticker(&raw)
    }
}
