//! Drives a [`TipCalculator`] from the command line.
//!
//! Both entry points write the display to a caller-supplied writer so the
//! binary can hand them stdout and tests can hand them a buffer.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use tip_core::{SplitCount, TipCalculator, TipDefaults, TipEvent, TipPreset};
use tracing::{debug, info, warn};

use crate::commands::{Command, HELP};
use crate::config::Settings;
use crate::display::render_summary;

/// Inputs for a one-shot calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalcRequest {
    pub bill: String,
    /// Overrides the configured default split.
    pub people: Option<u32>,
    pub preset: Option<TipPreset>,
    /// Custom slider position; takes precedence over `preset`.
    pub custom: Option<Decimal>,
}

impl CalcRequest {
    /// The events a user would produce on the tip screen for this request.
    pub fn events(&self) -> Vec<TipEvent> {
        let mut events = vec![TipEvent::BillChanged(self.bill.clone())];
        if let Some(position) = self.custom {
            events.push(TipEvent::CustomModeSet(true));
            events.push(TipEvent::SliderMoved(position));
        } else if let Some(preset) = self.preset {
            events.push(TipEvent::PresetSelected(preset));
        }
        events
    }
}

/// Builds a calculator for `request`, starting from the configured defaults.
pub fn build_calculator(
    settings: &Settings,
    request: &CalcRequest,
) -> TipCalculator {
    let mut defaults = settings.tip_defaults();
    if let Some(people) = request.people {
        let split = SplitCount::new(people);
        if u32::from(split) != people {
            warn!(requested = people, applied = %split, "split count clamped");
        }
        defaults = TipDefaults { split, ..defaults };
    }

    let mut calc = TipCalculator::with_defaults(defaults);
    for event in request.events() {
        calc.apply(event);
    }
    calc
}

/// Computes one request and writes the display.
pub fn run_calc<W: Write>(
    settings: &Settings,
    request: &CalcRequest,
    out: &mut W,
) -> io::Result<()> {
    let calc = build_calculator(settings, request);
    let summary = calc.summary();
    info!(
        bill = %summary.bill_amount,
        people = %summary.split,
        tip = %summary.tip_fraction.value(),
        tip_per_person = %summary.tip_per_person,
        "calculated tip"
    );
    out.write_all(render_summary(&summary, &settings.currency_symbol).as_bytes())
}

/// Reads commands from `input` until it ends or `quit` is entered.
///
/// Each line is applied before the next is read. The display is printed
/// after every state change; bad commands are reported and change nothing.
pub fn run_session<R: BufRead, W: Write>(
    settings: &Settings,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut calc = TipCalculator::with_defaults(settings.tip_defaults());
    let defaults = calc.defaults();
    info!(
        people = %defaults.split,
        tip = %defaults.tip.value(),
        "tip session started"
    );
    writeln!(out, "Type 'help' for commands.")?;
    write!(out, "{}", render_summary(&calc.summary(), &settings.currency_symbol))?;

    for line in input.lines() {
        let line = line?;
        match line.parse::<Command>() {
            Ok(Command::Event(event)) => {
                debug!(?event, "applying event");
                calc.apply(event);
                write!(out, "{}", render_summary(&calc.summary(), &settings.currency_symbol))?;
            }
            Ok(Command::Show) => {
                write!(out, "{}", render_summary(&calc.summary(), &settings.currency_symbol))?;
            }
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::Quit) => break,
            Err(error) => {
                debug!(%error, line = %line, "rejected session input");
                writeln!(out, "error: {error}")?;
            }
        }
        out.flush()?;
    }

    info!("tip session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn request(bill: &str) -> CalcRequest {
        CalcRequest {
            bill: bill.to_string(),
            ..CalcRequest::default()
        }
    }

    #[test]
    fn events_without_tip_only_set_bill() {
        assert_eq!(
            request("12").events(),
            vec![TipEvent::BillChanged("12".to_string())]
        );
    }

    #[test]
    fn custom_position_wins_over_preset() {
        let req = CalcRequest {
            preset: Some(TipPreset::TwentyPercent),
            custom: Some(dec!(0.33)),
            ..request("80")
        };

        assert_eq!(
            req.events(),
            vec![
                TipEvent::BillChanged("80".to_string()),
                TipEvent::CustomModeSet(true),
                TipEvent::SliderMoved(dec!(0.33)),
            ]
        );
    }

    #[test]
    fn build_calculator_applies_people_override() {
        let req = CalcRequest {
            people: Some(2),
            preset: Some(TipPreset::FifteenPercent),
            ..request("50.00")
        };

        let calc = build_calculator(&Settings::default(), &req);

        assert_eq!(calc.compute_tip_per_person(), dec!(3.75));
    }

    #[test]
    fn build_calculator_clamps_people() {
        let req = CalcRequest {
            people: Some(0),
            ..request("10")
        };

        let calc = build_calculator(&Settings::default(), &req);

        assert_eq!(calc.number_of_people(), SplitCount::MIN);
    }

    #[test]
    fn build_calculator_keeps_configured_tip_without_flags() {
        let settings = Settings {
            default_tip_percent: dec!(20),
            default_people: 4,
            ..Settings::default()
        };

        let calc = build_calculator(&settings, &request("100"));

        assert_eq!(calc.compute_tip_per_person(), dec!(5));
    }

    #[test]
    fn run_calc_writes_display() {
        let req = CalcRequest {
            people: Some(3),
            custom: Some(dec!(0.33)),
            ..request("80")
        };
        let mut out = Vec::new();

        run_calc(&Settings::default(), &req, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tip Per Person:   $8.80"));
    }
}
