//! Front-end settings loaded from an optional TOML file.
//!
//! ```toml
//! currency_symbol = "€"
//! default_people = 2
//! default_tip_percent = 18
//! log_level = "debug"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tip_core::{SplitCount, TipDefaults, TipFraction};
use tracing::{debug, info};

/// Errors raised while loading [`Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("currency symbol must not be empty")]
    EmptyCurrencySymbol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prefix for every displayed amount.
    pub currency_symbol: String,

    /// Split count a new session starts with. Clamped into `[1, 100]`.
    pub default_people: u32,

    /// Tip percentage a new session starts with. Clamped into `[0, 100]`.
    pub default_tip_percent: Decimal,

    /// Log filter directive; `RUST_LOG` is used when absent.
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            default_people: 1,
            default_tip_percent: Decimal::ZERO,
            log_level: None,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        info!(path = %path.display(), "loading config file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;

        Ok(settings)
    }

    /// Parses settings from TOML text without validating them.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }
        Ok(())
    }

    /// Starting split and tip for a calculator.
    pub fn tip_defaults(&self) -> TipDefaults {
        TipDefaults {
            split: SplitCount::new(self.default_people),
            tip: TipFraction::from_percent(self.default_tip_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_settings_use_dollars_and_no_tip() {
        let settings = Settings::default();

        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.tip_defaults(), TipDefaults::default());
    }

    #[test]
    fn load_without_path_returns_defaults() {
        let settings = Settings::load(None).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn from_toml_fills_missing_keys_with_defaults() {
        let settings = Settings::from_toml("default_people = 4").unwrap();

        assert_eq!(settings.default_people, 4);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.log_level, None);
    }

    #[test]
    fn from_toml_reads_every_key() {
        let settings = Settings::from_toml(
            r#"
            currency_symbol = "€"
            default_people = 3
            default_tip_percent = 18
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.default_people, 3);
        assert_eq!(settings.default_tip_percent, dec!(18));
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn from_toml_rejects_wrong_types() {
        assert!(Settings::from_toml("default_people = \"many\"").is_err());
    }

    #[test]
    fn validate_rejects_blank_currency_symbol() {
        let settings = Settings {
            currency_symbol: " ".to_string(),
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(ConfigError::EmptyCurrencySymbol)
        ));
    }

    #[test]
    fn tip_defaults_clamp_out_of_range_values() {
        let settings = Settings {
            default_people: 0,
            default_tip_percent: dec!(150),
            ..Settings::default()
        };

        let defaults = settings.tip_defaults();

        assert_eq!(defaults.split, SplitCount::MIN);
        assert_eq!(defaults.tip, TipFraction::ONE);
    }

    #[test]
    fn load_reports_missing_file() {
        let result = Settings::load(Some(Path::new("/definitely/not/here/tip.toml")));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
