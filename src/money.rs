//! Exact-decimal parsing and the currency / percentage renderings used in reports.

use crate::error::AllocationError;

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const CURRENCY_SYMBOL: &str = "$";

/// Parses a user-supplied amount into an exact decimal.
///
/// Surrounding whitespace is ignored and scientific notation (`1e3`) is
/// accepted. Anything that isn't a finite decimal, or that carries more
/// digits than a `Decimal` holds without rounding, is rejected with an error
/// naming `field`.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, AllocationError> {
    let trimmed = raw.trim();

    Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AllocationError::Parse {
            field,
            value: raw.to_string(),
        })
}

/// `$1234.50`, `$-5.00`. Always two places, midpoint rounded away from zero.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = round_to(amount, 2);
    rounded.rescale(2);
    format!("{}{}", CURRENCY_SYMBOL, rounded)
}

/// `95%`. Whole percents only.
pub fn format_percentage(percentage: Decimal) -> String {
    format!("{}%", round_to(percentage, 0))
}

pub(crate) fn round_to(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);

    // A tiny negative value must not render as "-0.00".
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

pub(crate) fn checked_add(
    lhs: Decimal,
    rhs: Decimal,
    operation: &'static str,
) -> Result<Decimal, AllocationError> {
    lhs.checked_add(rhs)
        .ok_or(AllocationError::Overflow { operation })
}

pub(crate) fn checked_sub(
    lhs: Decimal,
    rhs: Decimal,
    operation: &'static str,
) -> Result<Decimal, AllocationError> {
    lhs.checked_sub(rhs)
        .ok_or(AllocationError::Overflow { operation })
}

pub(crate) fn checked_mul(
    lhs: Decimal,
    rhs: Decimal,
    operation: &'static str,
) -> Result<Decimal, AllocationError> {
    lhs.checked_mul(rhs)
        .ok_or(AllocationError::Overflow { operation })
}
