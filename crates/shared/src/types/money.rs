//! Money helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount in the system is a `rust_decimal::Decimal`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places amounts are presented with.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds an amount to currency precision (half away from zero).
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_currency(amount);
    rounded.rescale(CURRENCY_SCALE);
    rounded.to_string()
}

/// Returns true if two amounts differ by at most `tolerance`.
#[must_use]
pub fn within_tolerance(left: Decimal, right: Decimal, tolerance: Decimal) -> bool {
    (left - right).abs() <= tolerance.abs()
}
