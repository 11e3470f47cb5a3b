//! Pure decimal conversions: percentages and derived fill prices.
//!
//! All math uses `rust_decimal::Decimal`, so no binary floating-point error
//! leaks into fee factors or prices.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::cmp::Ordering;

use crate::error::AdapterError;

const PERCENT_DECIMAL_SHIFT: u32 = 2;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Convert a percentage into a factor by moving the decimal point two places left.
///
/// `0.25` (meaning 0.25 %) becomes `0.0025`. The result keeps every input digit;
/// only the scale grows.
pub fn percent_to_factor(percent: Decimal) -> Decimal {
    let mut factor = percent;
    match factor.set_scale(percent.scale() + PERCENT_DECIMAL_SHIFT) {
        Ok(()) => factor,
        // Scale would exceed the 28-digit limit; fall back to a rounded division.
        Err(_) => percent / Decimal::ONE_HUNDRED,
    }
}

/// Price of a fill: `settlement / traded`, rounded half-to-even to `scale` digits.
///
/// The returned value always carries exactly `scale` fractional digits.
pub fn compute_fill_price(
    settlement: Decimal,
    traded: Decimal,
    scale: u32,
) -> Result<Decimal, AdapterError> {
    if traded.is_zero() {
        return Err(AdapterError::DivisionByZero {
            context: format!("fill price {} / {}", settlement, traded),
        });
    }

    let quotient = settlement
        .checked_div(traded)
        .ok_or_else(|| AdapterError::Overflow {
            context: format!("fill price {} / {}", settlement, traded),
        })?;

    let mut price = match break_tie(settlement, traded, quotient, scale) {
        Some(price) => price,
        None => quotient.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven),
    };
    price.rescale(scale);
    Ok(price)
}

/// `checked_div` keeps at most 28 fractional digits, so a quotient lying just
/// off a midpoint can come back exactly on it. Such ties are decided against
/// the undivided operands: `None` means the tie is real and half-even applies.
fn break_tie(settlement: Decimal, traded: Decimal, quotient: Decimal, scale: u32) -> Option<Decimal> {
    if scale >= MAX_SCALE {
        return None;
    }
    let toward_zero = quotient.round_dp_with_strategy(scale, RoundingStrategy::ToZero);
    let half_unit = Decimal::new(5, scale + 1);
    if (quotient - toward_zero).abs() != half_unit {
        return None;
    }

    // quotient is the midpoint itself here
    let product = quotient.checked_mul(traded)?;
    match product.abs().cmp(&settlement.abs()) {
        // exact quotient lies beyond the midpoint
        Ordering::Less => {
            let unit = Decimal::new(1, scale);
            if quotient.is_sign_negative() {
                Some(toward_zero - unit)
            } else {
                Some(toward_zero + unit)
            }
        }
        Ordering::Greater => Some(toward_zero),
        Ordering::Equal => None,
    }
}
