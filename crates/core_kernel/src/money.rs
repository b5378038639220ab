//! Currency arithmetic with precise decimals
//!
//! Claim estimates are summed and averaged as `rust_decimal::Decimal` so that
//! a total like 377726.38 is reported exactly rather than drifting through
//! binary floating point.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places reported for currency amounts
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, halves away from zero
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Mean of a set of amounts, rounded to cents
///
/// Returns `None` when there is nothing to average.
pub fn average_amount<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let (total, count) = amounts
        .into_iter()
        .fold((Decimal::ZERO, 0u64), |(total, count), amount| (total + amount, count + 1));

    if count == 0 {
        return None;
    }
    Some(round_currency(total / Decimal::from(count)))
}

/// Rounds a ratio to a fixed number of decimal places, halves away from zero
pub fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
