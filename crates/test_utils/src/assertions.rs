//! Custom Test Assertions
//!
//! Assertion helpers for the values queries return, with messages that name
//! both sides.

use rust_decimal::Decimal;

use core_kernel::CURRENCY_DECIMAL_PLACES;

/// Asserts that an optional money amount equals the expected one
///
/// # Panics
///
/// Panics if the presence or the amount differs
pub fn assert_amount_eq(actual: Option<Decimal>, expected: Option<Decimal>) {
    match (actual, expected) {
        (Some(actual), Some(expected)) => assert_eq!(
            actual, expected,
            "Amounts differ: actual={actual}, expected={expected}"
        ),
        (None, None) => {}
        (actual, expected) => panic!("Amount presence differs: actual={actual:?}, expected={expected:?}"),
    }
}

/// Asserts that an amount carries at most two decimal places
pub fn assert_rounded_to_cents(amount: Decimal) {
    assert!(
        amount.scale() <= CURRENCY_DECIMAL_PLACES,
        "Expected at most {CURRENCY_DECIMAL_PLACES} decimal places, got {amount}"
    );
}

/// Asserts that two floats agree within a tolerance
pub fn assert_f64_approx_eq(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Values differ by more than tolerance: actual={actual}, expected={expected}, diff={diff}, tolerance={tolerance}"
    );
}

/// Asserts a density to the five places the query reports
pub fn assert_density_eq(actual: Option<f64>, expected: Option<f64>) {
    match (actual, expected) {
        (Some(actual), Some(expected)) => assert_f64_approx_eq(actual, expected, 1e-9),
        (None, None) => {}
        (actual, expected) => panic!("Density presence differs: actual={actual:?}, expected={expected:?}"),
    }
}

/// Asserts that a float has no digits past the given number of places
pub fn assert_at_most_places(value: f64, places: i32) {
    let scaled = value * 10f64.powi(places);
    assert!(
        (scaled - scaled.round()).abs() < 1e-6,
        "Expected at most {places} decimal places, got {value}"
    );
}
