//! Currency helpers shared by the calculator and the receipt layout.
//!
//! Amounts are carried at full precision through every calculation and are
//! only rounded here, when they are turned into text.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to two places using banker's rounding.
///
/// Midpoints go to the nearest even cent, which is how the receipt has always
/// rounded currency for display.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pizza_core::calculations::common::round_currency;
///
/// assert_eq!(round_currency(dec!(0.9800)), dec!(0.98));
/// assert_eq!(round_currency(dec!(1.005)), dec!(1.00));
/// assert_eq!(round_currency(dec!(1.015)), dec!(1.02));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Formats an amount as dollars with exactly two decimal digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pizza_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(12)), "$12.00");
/// assert_eq!(format_currency(dec!(0.63)), "$0.63");
/// assert_eq!(format_currency(dec!(23.5400)), "$23.54");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = round_currency(value);
    rounded.rescale(2);
    format!("${rounded}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_currency tests
    // =========================================================================

    #[test]
    fn round_currency_keeps_two_place_values() {
        assert_eq!(round_currency(dec!(14.98)), dec!(14.98));
    }

    #[test]
    fn round_currency_drops_trailing_precision() {
        assert_eq!(round_currency(dec!(0.9800)), dec!(0.98));
    }

    #[test]
    fn round_currency_rounds_midpoint_to_even() {
        assert_eq!(round_currency(dec!(0.125)), dec!(0.12));
        assert_eq!(round_currency(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn round_currency_rounds_above_midpoint_up() {
        assert_eq!(round_currency(dec!(0.1251)), dec!(0.13));
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_pads_whole_dollars() {
        assert_eq!(format_currency(dec!(8)), "$8.00");
    }

    #[test]
    fn format_currency_pads_single_decimal() {
        assert_eq!(format_currency(dec!(12.5)), "$12.50");
    }

    #[test]
    fn format_currency_keeps_leading_zero() {
        assert_eq!(format_currency(dec!(0.98)), "$0.98");
    }

    #[test]
    fn format_currency_handles_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn format_currency_rounds_long_fractions() {
        assert_eq!(format_currency(dec!(1.5400)), "$1.54");
        assert_eq!(format_currency(dec!(9.6349)), "$9.63");
    }
}
