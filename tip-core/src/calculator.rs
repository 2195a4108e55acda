//! The tip calculator state.
//!
//! [`TipCalculator`] owns everything a tip screen mutates: the raw bill
//! text, the split count, the tip fraction, the preset/custom mode and the
//! slider position. Derived amounts are never stored; each query recomputes
//! them from the current state, so a mutation always supersedes the previous
//! result.
//!
//! Nothing here fails. Unusable bill text counts as a zero bill, split
//! changes past the bounds are ignored, and out-of-range fractions and
//! slider positions are clamped.
//!
//! # Mode state machine
//!
//! | From | Action | To | Tip fraction |
//! |------|--------|----|--------------|
//! | Preset | `set_tip_fraction` / `select_preset` | Preset | the given value |
//! | Preset | `set_custom_tip_mode(true)` | Custom | slider synced to current tip, tip = slider |
//! | Custom | `set_slider_position` | Custom | slider position |
//! | Custom | `set_tip_fraction` / `select_preset` | Preset | the given value |
//! | Custom | `set_custom_tip_mode(false)` | Preset | unchanged |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{TipCalculator, TipPreset};
//!
//! let mut calc = TipCalculator::new();
//! calc.set_bill_amount_text("50.00");
//! calc.select_preset(TipPreset::FifteenPercent);
//! calc.increment_people();
//!
//! assert_eq!(calc.compute_tip_per_person(), dec!(3.75));
//! assert_eq!(calc.compute_total_per_person(), dec!(28.75));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::{tip_per_person, total_per_person};
use crate::event::TipEvent;
use crate::input::{ParseAmountError, bill_amount_or_zero, is_valid_bill_text, parse_bill_amount};
use crate::models::{SliderPosition, SplitCount, TipFraction, TipMode, TipPreset, TipSummary};

/// Starting values for a calculator, restored by [`TipCalculator::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipDefaults {
    pub split: SplitCount,
    pub tip: TipFraction,
}

/// State of one tip-splitting session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipCalculator {
    defaults: TipDefaults,
    bill_text: String,
    split: SplitCount,
    tip: TipFraction,
    mode: TipMode,
    slider: SliderPosition,
}

impl TipCalculator {
    /// Creates a calculator with an empty bill, one person and no tip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator starting from `defaults`.
    pub fn with_defaults(defaults: TipDefaults) -> Self {
        Self {
            defaults,
            split: defaults.split,
            tip: defaults.tip,
            ..Self::default()
        }
    }

    // ─── inputs ──────────────────────────────────────────────────────────────

    /// Stores the raw bill text. Never fails; see [`Self::is_valid_bill`].
    pub fn set_bill_amount_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.bill_text = text.into();

        match parse_bill_amount(&self.bill_text) {
            Ok(amount) => debug!(%amount, "bill amount changed"),
            Err(ParseAmountError::Empty) => debug!("bill amount cleared"),
            Err(error) => warn!(%error, "bill amount unusable; treating as zero"),
        }
    }

    /// Adds one person to the split. Returns `false` at the upper bound.
    pub fn increment_people(&mut self) -> bool {
        match self.split.incremented() {
            Some(split) => {
                self.split = split;
                debug!(%split, "split count increased");
                true
            }
            None => {
                debug!(split = %self.split, "split count already at maximum");
                false
            }
        }
    }

    /// Removes one person from the split. Returns `false` at the lower bound.
    pub fn decrement_people(&mut self) -> bool {
        match self.split.decremented() {
            Some(split) => {
                self.split = split;
                debug!(%split, "split count decreased");
                true
            }
            None => {
                debug!(split = %self.split, "split count already at minimum");
                false
            }
        }
    }

    /// Sets the tip fraction directly (clamped into `[0, 1]`) and leaves
    /// custom mode.
    pub fn set_tip_fraction(
        &mut self,
        fraction: Decimal,
    ) {
        let tip = TipFraction::new(fraction);
        if tip.value() != fraction {
            warn!(requested = %fraction, applied = %tip.value(), "tip fraction clamped");
        }
        self.tip = tip;
        self.mode = TipMode::Preset;
        debug!(tip = %self.tip.value(), "tip fraction set");
    }

    /// Selects one of the preset tip buttons.
    pub fn select_preset(
        &mut self,
        preset: TipPreset,
    ) {
        self.set_tip_fraction(preset.fraction());
    }

    /// Switches custom mode on or off.
    ///
    /// Entering custom mode moves the slider to the current tip (clamped into
    /// the slider range) and makes the slider the tip source. Leaving it keeps
    /// the last tip until a preset is chosen.
    pub fn set_custom_tip_mode(
        &mut self,
        enabled: bool,
    ) {
        if enabled == self.mode.is_custom() {
            return;
        }

        if enabled {
            self.slider = SliderPosition::new(self.tip.value());
            self.tip = self.slider.as_tip_fraction();
            self.mode = TipMode::Custom;
        } else {
            self.mode = TipMode::Preset;
        }
        debug!(mode = self.mode.as_str(), tip = %self.tip.value(), "tip mode changed");
    }

    /// Flips custom mode, as the "Custom" button does.
    pub fn toggle_custom_tip_mode(&mut self) {
        self.set_custom_tip_mode(self.mode.toggled().is_custom());
    }

    /// Moves the custom tip slider (clamped into `[0.01, 1.00]`).
    ///
    /// The tip follows the slider only in custom mode.
    pub fn set_slider_position(
        &mut self,
        position: Decimal,
    ) {
        self.slider = SliderPosition::new(position);
        if self.slider.value() != position {
            warn!(requested = %position, applied = %self.slider.value(), "slider position clamped");
        }

        if self.mode.is_custom() {
            self.tip = self.slider.as_tip_fraction();
            debug!(tip = %self.tip.value(), "tip fraction follows slider");
        } else {
            debug!(slider = %self.slider.value(), "slider moved outside custom mode");
        }
    }

    /// Restores the session defaults and clears the bill.
    pub fn reset(&mut self) {
        *self = Self::with_defaults(self.defaults);
        debug!("calculator reset");
    }

    /// Applies one presentation-layer event.
    pub fn apply(
        &mut self,
        event: TipEvent,
    ) {
        match event {
            TipEvent::BillChanged(text) => self.set_bill_amount_text(text),
            TipEvent::IncrementPeople => {
                self.increment_people();
            }
            TipEvent::DecrementPeople => {
                self.decrement_people();
            }
            TipEvent::PresetSelected(preset) => self.select_preset(preset),
            TipEvent::TipFractionSet(fraction) => self.set_tip_fraction(fraction),
            TipEvent::CustomToggled => self.toggle_custom_tip_mode(),
            TipEvent::CustomModeSet(enabled) => self.set_custom_tip_mode(enabled),
            TipEvent::SliderMoved(position) => self.set_slider_position(position),
            TipEvent::Reset => self.reset(),
        }
    }

    // ─── state ───────────────────────────────────────────────────────────────

    pub fn bill_amount_text(&self) -> &str {
        &self.bill_text
    }

    /// Whether any bill text has been entered (non-empty after trimming).
    pub fn is_valid_bill(&self) -> bool {
        is_valid_bill_text(&self.bill_text)
    }

    /// The bill as a number; zero when the text is empty or unusable.
    pub fn bill_amount(&self) -> Decimal {
        if !self.is_valid_bill() {
            return Decimal::ZERO;
        }
        bill_amount_or_zero(&self.bill_text)
    }

    pub fn number_of_people(&self) -> SplitCount {
        self.split
    }

    pub fn tip_fraction(&self) -> TipFraction {
        self.tip
    }

    pub fn mode(&self) -> TipMode {
        self.mode
    }

    pub fn is_custom_tip_mode(&self) -> bool {
        self.mode.is_custom()
    }

    pub fn slider_position(&self) -> SliderPosition {
        self.slider
    }

    pub fn defaults(&self) -> TipDefaults {
        self.defaults
    }

    // ─── derived ─────────────────────────────────────────────────────────────

    /// `(bill × tip) / people`, or zero for an empty or unusable bill.
    pub fn compute_tip_per_person(&self) -> Decimal {
        tip_per_person(self.bill_amount(), self.tip, self.split)
    }

    /// `bill / people + tip per person`, or zero for an empty or unusable bill.
    pub fn compute_total_per_person(&self) -> Decimal {
        total_per_person(self.bill_amount(), self.tip, self.split)
    }

    pub fn summary(&self) -> TipSummary {
        TipSummary {
            valid_bill: self.is_valid_bill(),
            bill_amount: self.bill_amount(),
            split: self.split,
            tip_fraction: self.tip,
            mode: self.mode,
            slider: self.slider,
            tip_per_person: self.compute_tip_per_person(),
            total_per_person: self.compute_total_per_person(),
        }
    }
}
