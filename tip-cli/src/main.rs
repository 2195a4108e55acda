use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use tracing::debug;

use tip_cli::{CalcRequest, Settings, logging, run_calc, run_session};
use tip_core::TipPreset;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Split a restaurant bill's tip between the people at the table.
#[derive(Debug, Parser)]
#[command(name = "tip", version)]
struct Cli {
    /// TOML settings file (currency symbol, default split and tip).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tip_core=trace`. Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Calculate once and print the result.
    Calc {
        /// Bill amount, e.g. `50.00` or `$1,200`.
        #[arg(long, allow_hyphen_values = true)]
        bill: String,

        /// Number of people splitting the bill (clamped to 1..=100).
        #[arg(long)]
        people: Option<u32>,

        /// Preset tip button.
        #[arg(long, value_enum, conflicts_with = "custom")]
        tip: Option<PresetArg>,

        /// Custom tip slider position, 0.01 to 1.00.
        #[arg(long)]
        custom: Option<Decimal>,
    },

    /// Read commands from stdin, one per line, printing the amounts after each.
    Session,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    #[value(name = "15")]
    Fifteen,
    #[value(name = "20")]
    Twenty,
}

impl From<PresetArg> for TipPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Fifteen => TipPreset::FifteenPercent,
            PresetArg::Twenty => TipPreset::TwentyPercent,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref()).context("failed to start logging")?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let (None, Some(level)) = (&cli.log_level, &settings.log_level) {
        logging::set_log_level(level)?;
    }
    debug!(?settings, "settings loaded");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Calc {
            bill,
            people,
            tip,
            custom,
        } => {
            let request = CalcRequest {
                bill,
                people,
                preset: tip.map(TipPreset::from),
                custom,
            };
            run_calc(&settings, &request, &mut stdout).context("failed to write result")?;
        }
        Commands::Session => {
            run_session(&settings, io::stdin().lock(), &mut stdout)
                .context("tip session failed")?;
        }
    }

    Ok(())
}
