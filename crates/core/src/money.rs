//! Money arithmetic for integer-cent prices.
//!
//! Prices are stored as `i64` values in the smallest currency unit and only
//! converted to decimal form for display. Conversions truncate toward zero
//! at the point the division happens, so per-line totals and cart-level
//! totals are computed by separate formulas (see [`crate::cart`]) and may
//! legitimately disagree in the last digit.

use rust_decimal::Decimal;

/// Convert an integer-cent amount to its display value (`cents / 100`).
pub fn display_price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Display total for a single line: `trunc(unit_price * quantity) / 100`.
///
/// The multiplication stays in integer cents, so the truncation is applied
/// to the line product before the division.
pub fn line_total(unit_price: i64, quantity: i64) -> Decimal {
    Decimal::new(unit_price * quantity, 2)
}
