//! Inputs a tip screen can emit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TipPreset;

/// One user interaction, applied with [`TipCalculator::apply`].
///
/// [`TipCalculator::apply`]: crate::TipCalculator::apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipEvent {
    /// The bill text field changed.
    BillChanged(String),
    /// The "+" split button was pressed.
    IncrementPeople,
    /// The "−" split button was pressed.
    DecrementPeople,
    /// A preset tip button was pressed.
    PresetSelected(TipPreset),
    /// The tip fraction was set directly.
    TipFractionSet(Decimal),
    /// The "Custom" button was pressed.
    CustomToggled,
    /// Custom mode was switched explicitly on or off.
    CustomModeSet(bool),
    /// The custom tip slider moved.
    SliderMoved(Decimal),
    /// Back to the session defaults.
    Reset,
}
