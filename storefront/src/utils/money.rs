//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are `Decimal` amounts in the major currency unit. Sums are
//! computed unrounded and rounded once, half away from zero, to 2 places.

use rust_decimal::prelude::*;
use shared::{AppError, AppResult, CartLine};

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per product (1,000,000)
const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Round a monetary value to 2 decimal places
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounded `price * quantity` of one line
pub fn line_total(line: &CartLine) -> Decimal {
    round_money(line.line_total())
}

/// Rounded sum of `price * quantity` over all lines
///
/// Saturates at `Decimal::MAX` instead of overflowing.
pub fn lines_total<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Decimal {
    let sum = lines
        .into_iter()
        .map(CartLine::line_total)
        .try_fold(Decimal::ZERO, |acc, total| acc.checked_add(total))
        .unwrap_or(Decimal::MAX);
    round_money(sum)
}

/// Validate a price loaded from catalog or inventory data and normalize it
/// to 2 decimal places
pub fn validate_price(price: Decimal, field_name: &str) -> AppResult<Decimal> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::invalid_price(format!(
            "{} must be non-negative, got {}",
            field_name, price
        ))
        .with_detail("field", field_name));
    }
    if price > MAX_PRICE {
        return Err(AppError::invalid_price(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_PRICE, price
        ))
        .with_detail("field", field_name));
    }
    Ok(round_money(price))
}
