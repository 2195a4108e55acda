//! Text rendering of a [`TipSummary`].

use std::fmt;

use tip_core::format::{format_currency, format_percent, format_split};
use tip_core::{SliderPosition, TipSummary};

/// Renders the tip display.
///
/// The split and tip lines only appear once a bill has been entered,
/// mirroring a form that reveals its controls for a non-empty bill.
pub fn render_summary(
    summary: &TipSummary,
    currency_symbol: &str,
) -> String {
    SummaryView {
        summary,
        currency_symbol,
    }
    .to_string()
}

/// [`TipSummary`] paired with the currency it is shown in.
pub struct SummaryView<'a> {
    pub summary: &'a TipSummary,
    pub currency_symbol: &'a str,
}

impl fmt::Display for SummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;
        writeln!(
            f,
            "Tip Per Person:   {}",
            format_currency(summary.tip_per_person, self.currency_symbol)
        )?;
        writeln!(
            f,
            "Total Per Person: {}",
            format_currency(summary.total_per_person, self.currency_symbol)
        )?;

        if !summary.valid_bill {
            return writeln!(f, "Enter a bill amount to split it.");
        }

        writeln!(f, "Split:            {}", format_split(summary.split))?;
        write!(f, "Tip:              {}", format_percent(summary.tip_fraction))?;
        if summary.mode.is_custom() {
            write!(
                f,
                " (custom, slider step {}/{})",
                summary.slider.step_index(),
                SliderPosition::STEPS
            )?;
        }
        writeln!(f)
    }
}
