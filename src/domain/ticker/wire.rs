//! Wire types for ANX ticker responses.

use crate::domain::wire::AnxValue;
use crate::shared::serde_util::i64_or_string;
use serde::{Deserialize, Serialize};

/// ANX `money/ticker` payload.
///
/// `now` is epoch microseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnxTicker {
    pub high: AnxValue,
    pub low: AnxValue,
    pub avg: AnxValue,
    #[serde(default)]
    pub vwap: Option<AnxValue>,
    pub vol: AnxValue,
    pub last: AnxValue,
    pub buy: AnxValue,
    pub sell: AnxValue,
    #[serde(with = "i64_or_string")]
    pub now: i64,
}
