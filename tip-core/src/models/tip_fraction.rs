use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::clamp;

/// Share of the bill given as gratuity, always within `[0, 1]`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::TipFraction;
///
/// assert_eq!(TipFraction::new(dec!(0.18)).value(), dec!(0.18));
/// assert_eq!(TipFraction::new(dec!(1.5)).value(), dec!(1));
/// assert_eq!(TipFraction::from_percent(dec!(20)).value(), dec!(0.20));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct TipFraction(Decimal);

impl TipFraction {
    pub const ZERO: TipFraction = TipFraction(Decimal::ZERO);
    pub const ONE: TipFraction = TipFraction(Decimal::ONE);

    /// Creates a tip fraction, clamping `value` into `[0, 1]`.
    pub fn new(value: Decimal) -> Self {
        Self(clamp(value, Decimal::ZERO, Decimal::ONE))
    }

    /// Creates a tip fraction from a whole or fractional percentage (`18` → `0.18`).
    pub fn from_percent(percent: Decimal) -> Self {
        Self::new(percent / Decimal::ONE_HUNDRED)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn as_percent(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl From<Decimal> for TipFraction {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<TipFraction> for Decimal {
    fn from(fraction: TipFraction) -> Self {
        fraction.0
    }
}

impl From<TipPreset> for TipFraction {
    fn from(preset: TipPreset) -> Self {
        Self(preset.fraction())
    }
}

/// The fixed tip buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipPreset {
    FifteenPercent,
    TwentyPercent,
}

impl TipPreset {
    pub fn all() -> &'static [TipPreset] {
        &[TipPreset::FifteenPercent, TipPreset::TwentyPercent]
    }

    pub fn fraction(&self) -> Decimal {
        match self {
            TipPreset::FifteenPercent => Decimal::new(15, 2),
            TipPreset::TwentyPercent => Decimal::new(20, 2),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipPreset::FifteenPercent => "15%",
            TipPreset::TwentyPercent => "20%",
        }
    }

    /// The preset whose fraction equals `fraction`, if any (`0.150` matches 15%).
    pub fn from_fraction(fraction: Decimal) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.fraction() == fraction)
    }
}

impl fmt::Display for TipPreset {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
