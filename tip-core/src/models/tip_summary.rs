use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{SliderPosition, SplitCount, TipFraction, TipMode};

/// Snapshot of a calculator's inputs and derived amounts, ready for display.
///
/// Amounts are unrounded; formatting rounds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipSummary {
    /// Whether the bill text was non-empty. Front ends hide the split and tip
    /// controls until this is true.
    pub valid_bill: bool,

    /// Parsed bill amount, zero when the text is empty or unusable.
    pub bill_amount: Decimal,

    pub split: SplitCount,
    pub tip_fraction: TipFraction,
    pub mode: TipMode,
    pub slider: SliderPosition,

    pub tip_per_person: Decimal,
    pub total_per_person: Decimal,
}
