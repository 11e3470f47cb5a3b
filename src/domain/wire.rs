//! Wire types shared by several ANX domain slices.

use crate::shared::serde_util::decimal_or_number;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount tagged with its currency, as ANX embeds prices and balances.
///
/// ```json
/// { "value": "650.00000", "value_int": "65000000", "display": "$650.00", "currency": "USD" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnxValue {
    #[serde(with = "decimal_or_number")]
    pub value: Decimal,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_int: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl AnxValue {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
            value_int: None,
            display: None,
        }
    }
}
