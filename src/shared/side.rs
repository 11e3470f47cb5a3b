//! Side classification for exchange buy/sell tokens.

use super::Side;
use crate::error::AdapterError;

pub const SIDE_BID: &str = "bid";
pub const SIDE_ASK: &str = "ask";

/// How a side token is compared against the bid marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideMatch {
    /// Order-book and open-order payloads: `"BID"`, `"Bid"` and `"bid"` all match.
    IgnoreCase,
    /// Trade and trade-result payloads: only the literal `"bid"` matches.
    Exact,
}

impl SideMatch {
    fn matches(self, token: &str, marker: &str) -> bool {
        match self {
            SideMatch::IgnoreCase => token.eq_ignore_ascii_case(marker),
            SideMatch::Exact => token == marker,
        }
    }
}

/// Classify a side token. Anything that is not the bid marker is an ask,
/// including empty or unknown tokens.
pub fn classify_side(token: &str, mode: SideMatch) -> Side {
    if mode.matches(token, SIDE_BID) {
        Side::Bid
    } else {
        Side::Ask
    }
}

/// Like [`classify_side`], but only the bid and ask markers are accepted.
pub fn classify_side_strict(token: &str, mode: SideMatch) -> Result<Side, AdapterError> {
    if mode.matches(token, SIDE_BID) {
        Ok(Side::Bid)
    } else if mode.matches(token, SIDE_ASK) {
        Ok(Side::Ask)
    } else {
        Err(AdapterError::UnknownSide(token.to_string()))
    }
}
