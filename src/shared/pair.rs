//! Currency-pair resolution from exchange identifiers.

use super::CurrencyPair;
use crate::error::AdapterError;

/// Combined codes whose natural 3+3 split would be wrong.
const PAIR_ALIASES: &[(&str, &str, &str)] = &[("DOGEBTC", "DOGE", "BTC")];

const COMBINED_CODE_LEN: usize = 6;
const BASE_CODE_LEN: usize = 3;

/// Build a pair from already-separated traded and counter codes.
pub fn resolve_pair(traded: &str, counter: &str) -> CurrencyPair {
    CurrencyPair::new(traded, counter)
}

/// Parse a combined pair code such as `"BTCUSD"`.
///
/// Alias matching ignores case; a regular 6-character code is split 3/3 with
/// case preserved.
pub fn resolve_pair_from_code(code: &str) -> Result<CurrencyPair, AdapterError> {
    if let Some((_, base, counter)) = PAIR_ALIASES
        .iter()
        .find(|(alias, _, _)| alias.eq_ignore_ascii_case(code))
    {
        return Ok(CurrencyPair::new(*base, *counter));
    }

    if code.chars().count() != COMBINED_CODE_LEN {
        return Err(AdapterError::MalformedCurrencyPair(code.to_string()));
    }

    let split = code
        .char_indices()
        .nth(BASE_CODE_LEN)
        .map(|(idx, _)| idx)
        .ok_or_else(|| AdapterError::MalformedCurrencyPair(code.to_string()))?;
    let (base, counter) = code.split_at(split);
    Ok(CurrencyPair::new(base, counter))
}
