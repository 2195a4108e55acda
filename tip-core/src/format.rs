//! Display formatting for amounts, split counts and tip percentages.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculations::common::round_half_up;
use crate::models::{SplitCount, TipFraction};

/// Formats `amount` as currency with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(3.75), "$"), "$3.75");
/// assert_eq!(format_currency(dec!(8.8), "$"), "$8.80");
/// assert_eq!(format_currency(dec!(0), "€"), "€0.00");
/// ```
pub fn format_currency(
    amount: Decimal,
    symbol: &str,
) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(2);
    format!("{symbol}{rounded}")
}

/// Formats the split count right-aligned to width 3.
///
/// ```
/// use tip_core::SplitCount;
/// use tip_core::format::format_split;
///
/// assert_eq!(format_split(SplitCount::new(2)), "  2");
/// assert_eq!(format_split(SplitCount::MAX), "100");
/// ```
pub fn format_split(split: SplitCount) -> String {
    format!("{:>3}", split.get())
}

/// Formats a tip fraction as a whole percentage, rounding half up.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::TipFraction;
/// use tip_core::format::format_percent;
///
/// assert_eq!(format_percent(TipFraction::new(dec!(0.33))), "33%");
/// assert_eq!(format_percent(TipFraction::new(dec!(0.125))), "13%");
/// ```
pub fn format_percent(fraction: TipFraction) -> String {
    let percent = fraction
        .as_percent()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{percent}%")
}
