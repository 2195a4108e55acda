//! Line commands understood by the interactive session.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tip_core::{TipEvent, TipPreset};

pub const HELP: &str = "\
commands:
  bill <amount>        set the bill text (empty clears it)
  +  | add             add a person to the split
  -  | remove          remove a person from the split
  tip 15 | tip 20      choose a preset tip
  tip <percent>[%]     set the tip directly, e.g. tip 18 or tip 12.5%
  tip <fraction>       a value below 1 is a fraction, e.g. tip 0.18
  custom [on|off]      toggle or set custom tip mode
  slider <position>    move the custom slider, 0.01 to 1.00
  reset                start over
  show                 print the current amounts
  help                 print this message
  quit                 leave the session";

/// Errors for session input that is not a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{command}' expects {expected}, got '{value}'")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(TipEvent),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));

        let command = match name.to_ascii_lowercase().as_str() {
            "bill" => Command::Event(TipEvent::BillChanged(rest.to_string())),
            "+" | "add" => Command::Event(TipEvent::IncrementPeople),
            "-" | "remove" => Command::Event(TipEvent::DecrementPeople),
            "tip" => Command::Event(parse_tip(rest)?),
            "custom" => Command::Event(parse_custom(rest)?),
            "slider" => Command::Event(TipEvent::SliderMoved(parse_decimal_arg(
                "slider",
                "a position between 0.01 and 1.00",
                rest,
            )?)),
            "reset" => Command::Event(TipEvent::Reset),
            "show" | "" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(command)
    }
}

/// A tip given as a percentage (`18`, `18%`, `12.5`) or, below one, as a
/// fraction (`0.18`). Values matching a preset press that button.
fn parse_tip(arg: &str) -> Result<TipEvent, CommandError> {
    const EXPECTED: &str = "a percentage from 1 to 100 such as 18 or 18%, or a fraction below 1 such as 0.18";

    let percent_sign = arg.strip_suffix('%');
    let number = percent_sign.unwrap_or(arg).trim();
    let value = parse_decimal_arg("tip", EXPECTED, number)?;

    let fraction = if percent_sign.is_some() || value >= Decimal::ONE {
        value / Decimal::ONE_HUNDRED
    } else {
        value
    };
    if fraction < Decimal::ZERO || fraction > Decimal::ONE {
        return Err(CommandError::InvalidArgument {
            command: "tip",
            expected: EXPECTED,
            value: arg.to_string(),
        });
    }

    Ok(match TipPreset::from_fraction(fraction) {
        Some(preset) => TipEvent::PresetSelected(preset),
        None => TipEvent::TipFractionSet(fraction),
    })
}

fn parse_custom(arg: &str) -> Result<TipEvent, CommandError> {
    match arg.to_ascii_lowercase().as_str() {
        "" => Ok(TipEvent::CustomToggled),
        "on" => Ok(TipEvent::CustomModeSet(true)),
        "off" => Ok(TipEvent::CustomModeSet(false)),
        _ => Err(CommandError::InvalidArgument {
            command: "custom",
            expected: "'on' or 'off'",
            value: arg.to_string(),
        }),
    }
}

fn parse_decimal_arg(
    command: &'static str,
    expected: &'static str,
    arg: &str,
) -> Result<Decimal, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument { command, expected });
    }
    arg.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        expected,
        value: arg.to_string(),
    })
}
