//! Exchange metadata: per-pair price precision and trading limits.
//!
//! Metadata is retrieved elsewhere and handed to the adapters read-only. Any table
//! that can answer "how many fractional digits does this pair's price carry?"
//! works through [`PriceScaleLookup`].

use crate::error::AdapterError;
use crate::shared::{Currency, CurrencyPair};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const ANX_METADATA_JSON: &str = include_str!("../resources/anx.json");

/// Read-only pair → price scale lookup consumed by user-trade adaptation.
pub trait PriceScaleLookup {
    /// Declared price scale for `pair`, or `None` if the pair is unknown.
    fn price_scale(&self, pair: &CurrencyPair) -> Option<u32>;

    /// Declared price scale, failing with [`AdapterError::UnknownPairScale`].
    fn scale_for(&self, pair: &CurrencyPair) -> Result<u32, AdapterError> {
        self.price_scale(pair)
            .ok_or_else(|| AdapterError::UnknownPairScale(pair.clone()))
    }
}

impl PriceScaleLookup for HashMap<CurrencyPair, u32> {
    fn price_scale(&self, pair: &CurrencyPair) -> Option<u32> {
        self.get(pair).copied()
    }
}

impl<T: PriceScaleLookup + ?Sized> PriceScaleLookup for &T {
    fn price_scale(&self, pair: &CurrencyPair) -> Option<u32> {
        (**self).price_scale(pair)
    }
}

/// Trading metadata for one currency pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPairMetaData {
    #[serde(default)]
    pub trading_fee: Option<Decimal>,
    #[serde(default)]
    pub min_amount: Option<Decimal>,
    #[serde(default)]
    pub max_amount: Option<Decimal>,
    pub price_scale: u32,
}

/// Metadata for one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyMetaData {
    pub scale: u32,
}

/// Exchange-wide metadata table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExchangeMetaData {
    #[serde(default)]
    pub currency_pairs: HashMap<CurrencyPair, CurrencyPairMetaData>,
    #[serde(default)]
    pub currencies: HashMap<Currency, CurrencyMetaData>,
}

impl ExchangeMetaData {
    pub fn from_json_str(json: &str) -> Result<Self, AdapterError> {
        let meta: ExchangeMetaData = serde_json::from_str(json)?;
        tracing::debug!(
            "Loaded exchange metadata: {} pair(s), {} currenc(ies)",
            meta.currency_pairs.len(),
            meta.currencies.len()
        );
        Ok(meta)
    }

    /// Metadata bundled with the crate for ANX.
    pub fn anx() -> Result<Self, AdapterError> {
        Self::from_json_str(ANX_METADATA_JSON)
    }

    pub fn pair(&self, pair: &CurrencyPair) -> Option<&CurrencyPairMetaData> {
        self.currency_pairs.get(pair)
    }

    /// Pair → price scale view, e.g. for callers that only keep scales around.
    pub fn price_scales(&self) -> HashMap<CurrencyPair, u32> {
        self.currency_pairs
            .iter()
            .map(|(pair, meta)| (pair.clone(), meta.price_scale))
            .collect()
    }
}

impl PriceScaleLookup for ExchangeMetaData {
    fn price_scale(&self, pair: &CurrencyPair) -> Option<u32> {
        self.pair(pair).map(|m| m.price_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_bundled_anx_metadata() {
        let meta = ExchangeMetaData::anx().unwrap();
        assert_eq!(meta.price_scale(&CurrencyPair::new("BTC", "USD")), Some(5));
        assert_eq!(meta.price_scale(&CurrencyPair::doge_btc()), Some(8));
        assert_eq!(meta.currencies[&Currency::from("JPY")].scale, 0);
        assert_eq!(
            meta.pair(&CurrencyPair::new("BTC", "USD")).unwrap().trading_fee,
            Some(Decimal::from_str("0.006").unwrap())
        );
    }

    #[test]
    fn test_scale_for_unknown_pair() {
        let meta = ExchangeMetaData::default();
        let pair = CurrencyPair::new("FOO", "BAR");
        match meta.scale_for(&pair) {
            Err(AdapterError::UnknownPairScale(p)) => assert_eq!(p, pair),
            other => panic!("expected UnknownPairScale, got {other:?}"),
        }
    }

    #[test]
    fn test_hash_map_lookup() {
        let mut scales = HashMap::new();
        scales.insert(CurrencyPair::new("BTC", "EUR"), 2u32);
        assert_eq!(scales.scale_for(&CurrencyPair::new("BTC", "EUR")).unwrap(), 2);
        assert!(scales.scale_for(&CurrencyPair::new("EUR", "BTC")).is_err());
    }

    #[test]
    fn test_price_scales_view() {
        let meta = ExchangeMetaData::from_json_str(
            r#"{"currency_pairs": {"LTC/BTC": {"price_scale": 8}}}"#,
        )
        .unwrap();
        let scales = meta.price_scales();
        assert_eq!(scales.len(), 1);
        assert_eq!(scales[&CurrencyPair::new("LTC", "BTC")], 8);
        assert!(meta.currencies.is_empty());
    }

    #[test]
    fn test_malformed_pair_key_rejected() {
        let res = ExchangeMetaData::from_json_str(
            r#"{"currency_pairs": {"LTCBTC": {"price_scale": 8}}}"#,
        );
        assert!(matches!(res, Err(AdapterError::Serde(_))));
    }
}
