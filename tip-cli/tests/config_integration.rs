//! Integration tests that load settings from on-disk fixture files.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tip_cli::{CalcRequest, ConfigError, Settings, run_calc};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_reads_every_key() {
    let settings = Settings::load(Some(&fixture_path("euro_table.toml")))
        .expect("fixture file should load without error");

    assert_eq!(settings.currency_symbol, "€");
    assert_eq!(settings.default_people, 4);
    assert_eq!(settings.default_tip_percent, dec!(18));
    assert_eq!(settings.log_level.as_deref(), Some("warn"));
}

#[test]
fn test_load_fixture_drives_calculation() {
    let settings = Settings::load(Some(&fixture_path("euro_table.toml"))).unwrap();
    let request = CalcRequest {
        bill: "120".to_string(),
        ..CalcRequest::default()
    };
    let mut out = Vec::new();

    run_calc(&settings, &request, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    // 120 × 0.18 / 4 = 5.40; 120 / 4 + 5.40 = 35.40
    assert!(text.contains("Tip Per Person:   €5.40"));
    assert!(text.contains("Total Per Person: €35.40"));
    assert!(text.contains("Tip:              18%"));
}

#[test]
fn test_load_rejects_blank_currency_symbol() {
    let result = Settings::load(Some(&fixture_path("blank_currency.toml")));

    assert!(matches!(result, Err(ConfigError::EmptyCurrencySymbol)));
}

#[test]
fn test_load_reports_malformed_toml_with_path() {
    let err = Settings::load(Some(&fixture_path("malformed.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("malformed.toml"));
}
