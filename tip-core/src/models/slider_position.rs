use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::calculations::common::clamp;
use crate::models::TipFraction;

/// Position of the custom tip slider, always within `[MIN, MAX]`.
///
/// The slider track is divided into [`SliderPosition::STEPS`] steps of
/// [`SliderPosition::STEP`]. Setting a position only clamps; it does not
/// snap, so a custom tip of exactly 33% stays 0.33. Front ends that draw a
/// stepped track can use [`SliderPosition::step_index`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::SliderPosition;
///
/// assert_eq!(SliderPosition::new(dec!(0)).value(), dec!(0.01));
/// assert_eq!(SliderPosition::new(dec!(0.33)).value(), dec!(0.33));
/// assert_eq!(SliderPosition::new(dec!(1.2)).value(), dec!(1.00));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct SliderPosition(Decimal);

impl SliderPosition {
    pub const MIN: SliderPosition = SliderPosition(Decimal::from_parts(1, 0, 0, false, 2));
    pub const MAX: SliderPosition = SliderPosition(Decimal::ONE);
    pub const STEPS: u32 = 100;
    pub const STEP: Decimal = Decimal::from_parts(99, 0, 0, false, 4);

    /// Creates a slider position, clamping `value` into `[0.01, 1.00]`.
    pub fn new(value: Decimal) -> Self {
        Self(clamp(value, Self::MIN.0, Self::MAX.0))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Index of the nearest discrete step, from `0` at [`SliderPosition::MIN`]
    /// to [`SliderPosition::STEPS`] at [`SliderPosition::MAX`].
    pub fn step_index(&self) -> u32 {
        ((self.0 - Self::MIN.0) / Self::STEP)
            .round()
            .to_u32()
            .unwrap_or(0)
            .min(Self::STEPS)
    }

    pub fn as_tip_fraction(&self) -> TipFraction {
        TipFraction::new(self.0)
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<Decimal> for SliderPosition {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<SliderPosition> for Decimal {
    fn from(position: SliderPosition) -> Self {
        position.0
    }
}
