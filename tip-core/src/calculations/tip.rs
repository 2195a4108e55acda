//! Per-person tip and total calculations.
//!
//! | Value | Formula |
//! |-------|---------|
//! | Tip per person | bill × tip fraction ÷ split count |
//! | Total per person | bill ÷ split count + tip per person |
//!
//! Both functions return zero for a zero bill and for a bill above
//! [`MAX_BILL`], so the two amounts always degrade together. The split count
//! is a [`SplitCount`], which is never below one, so the division cannot be
//! by zero. Below the cap the arithmetic cannot overflow; it is still checked.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::calculations::{tip_per_person, total_per_person};
//! use tip_core::{SplitCount, TipFraction};
//!
//! let split = SplitCount::new(2);
//! let tip = TipFraction::new(dec!(0.15));
//!
//! assert_eq!(tip_per_person(dec!(50.00), tip, split), dec!(3.75));
//! assert_eq!(total_per_person(dec!(50.00), tip, split), dec!(28.75));
//! ```

use rust_decimal::Decimal;

use crate::models::{SplitCount, TipFraction};

/// Largest bill the calculations accept: one quadrillion.
pub const MAX_BILL: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

fn in_range(bill: Decimal) -> bool {
    bill > Decimal::ZERO && bill <= MAX_BILL
}

/// Returns `(bill × tip) / split`, unrounded.
///
/// A bill that is not positive or exceeds [`MAX_BILL`] yields zero.
pub fn tip_per_person(
    bill: Decimal,
    tip: TipFraction,
    split: SplitCount,
) -> Decimal {
    if !in_range(bill) {
        return Decimal::ZERO;
    }

    bill.checked_mul(tip.value())
        .and_then(|tip_total| tip_total.checked_div(split.as_decimal()))
        .unwrap_or(Decimal::ZERO)
}

/// Returns `bill / split + tip_per_person(bill, tip, split)`, unrounded.
///
/// A bill that is not positive or exceeds [`MAX_BILL`] yields zero.
pub fn total_per_person(
    bill: Decimal,
    tip: TipFraction,
    split: SplitCount,
) -> Decimal {
    if !in_range(bill) {
        return Decimal::ZERO;
    }

    bill.checked_div(split.as_decimal())
        .and_then(|share| share.checked_add(tip_per_person(bill, tip, split)))
        .unwrap_or(Decimal::ZERO)
}
