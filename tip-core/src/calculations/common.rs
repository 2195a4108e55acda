//! Common decimal helpers shared by the calculations and the formatters.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero), the usual
/// convention for amounts shown on a bill.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3.754)), dec!(3.75));
/// assert_eq!(round_half_up(dec!(3.755)), dec!(3.76));
/// assert_eq!(round_half_up(dec!(8.8)), dec!(8.8));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps `value` into the inclusive range `[min, max]`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::clamp;
///
/// assert_eq!(clamp(dec!(1.5), dec!(0), dec!(1)), dec!(1));
/// assert_eq!(clamp(dec!(-0.2), dec!(0), dec!(1)), dec!(0));
/// assert_eq!(clamp(dec!(0.33), dec!(0), dec!(1)), dec!(0.33));
/// ```
pub fn clamp(
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Decimal {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(2.664));

        assert_eq!(result, dec!(2.66));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(2.665));

        assert_eq!(result, dec!(2.67));
    }

    #[test]
    fn round_half_up_handles_repeating_fraction() {
        let result = round_half_up(dec!(10) / dec!(3));

        assert_eq!(result, dec!(3.33));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_half_up_handles_small_values() {
        let result = round_half_up(dec!(0.004));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // clamp tests
    // =========================================================================

    #[test]
    fn clamp_keeps_value_inside_range() {
        let result = clamp(dec!(0.5), dec!(0.01), dec!(1));

        assert_eq!(result, dec!(0.5));
    }

    #[test]
    fn clamp_raises_value_below_range() {
        let result = clamp(dec!(0), dec!(0.01), dec!(1));

        assert_eq!(result, dec!(0.01));
    }

    #[test]
    fn clamp_lowers_value_above_range() {
        let result = clamp(dec!(2.5), dec!(0.01), dec!(1));

        assert_eq!(result, dec!(1));
    }

    #[test]
    fn clamp_accepts_bounds() {
        assert_eq!(clamp(dec!(0.01), dec!(0.01), dec!(1)), dec!(0.01));
        assert_eq!(clamp(dec!(1), dec!(0.01), dec!(1)), dec!(1));
    }
}
