//! Parsing of the raw bill text.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::MAX_BILL;

/// Why bill text could not be turned into an amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    /// The text was empty or whitespace only.
    #[error("bill amount is empty")]
    Empty,

    /// The text is not a number.
    #[error("invalid bill amount '{input}': {source}")]
    Malformed {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    /// The text parsed, but the amount is below zero.
    #[error("bill amount must not be negative, got {0}")]
    Negative(Decimal),

    /// The amount is above [`MAX_BILL`].
    #[error("bill amount {0} is larger than {max}", max = MAX_BILL)]
    TooLarge(Decimal),
}

/// Normalizes bill text: trims whitespace, drops one leading currency sign and
/// removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    unsigned.trim_start().replace(',', "")
}

/// Parses bill text into a non-negative amount no larger than [`MAX_BILL`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::input::parse_bill_amount;
///
/// assert_eq!(parse_bill_amount(" 50.00 ").unwrap(), dec!(50.00));
/// assert_eq!(parse_bill_amount("$1,234.56").unwrap(), dec!(1234.56));
/// assert!(parse_bill_amount("").is_err());
/// assert!(parse_bill_amount("lunch").is_err());
/// assert!(parse_bill_amount("-5").is_err());
/// assert!(parse_bill_amount("2,000,000,000,000,000").is_err());
/// ```
pub fn parse_bill_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Decimal = normalized
        .parse()
        .map_err(|source| ParseAmountError::Malformed {
            input: s.to_string(),
            source,
        })?;

    if amount < Decimal::ZERO {
        return Err(ParseAmountError::Negative(amount));
    }
    if amount > MAX_BILL {
        return Err(ParseAmountError::TooLarge(amount));
    }
    Ok(amount)
}

/// Parses bill text, treating every failure as a zero bill.
pub fn bill_amount_or_zero(s: &str) -> Decimal {
    parse_bill_amount(s).unwrap_or(Decimal::ZERO)
}

/// Whether the bill text counts as entered (non-empty after trimming).
pub fn is_valid_bill_text(s: &str) -> bool {
    !s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_bill_amount_trims_whitespace() {
        assert_eq!(parse_bill_amount("  80  ").unwrap(), dec!(80));
    }

    #[test]
    fn parse_bill_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_bill_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_bill_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_bill_amount_accepts_leading_dollar_sign() {
        assert_eq!(parse_bill_amount("$50").unwrap(), dec!(50));
        assert_eq!(parse_bill_amount(" $ 12.5").unwrap(), dec!(12.5));
    }

    #[test]
    fn parse_bill_amount_accepts_zero() {
        assert_eq!(parse_bill_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_bill_amount_rejects_empty() {
        assert!(matches!(parse_bill_amount(""), Err(ParseAmountError::Empty)));
        assert!(matches!(parse_bill_amount("   "), Err(ParseAmountError::Empty)));
        assert!(matches!(parse_bill_amount("$"), Err(ParseAmountError::Empty)));
    }

    #[test]
    fn parse_bill_amount_rejects_text() {
        let err = parse_bill_amount("twelve").unwrap_err();

        assert!(matches!(err, ParseAmountError::Malformed { ref input, .. } if input == "twelve"));
    }

    #[test]
    fn parse_bill_amount_rejects_negative() {
        let err = parse_bill_amount("-5.00").unwrap_err();

        assert!(matches!(err, ParseAmountError::Negative(amount) if amount == dec!(-5.00)));
    }

    #[test]
    fn parse_bill_amount_caps_large_bills() {
        assert_eq!(parse_bill_amount("1,000,000,000,000,000").unwrap(), MAX_BILL);

        let err = parse_bill_amount("79228162514264337593543950335").unwrap_err();

        assert!(matches!(err, ParseAmountError::TooLarge(amount) if amount == Decimal::MAX));
    }

    #[test]
    fn bill_amount_or_zero_degrades_failures() {
        assert_eq!(bill_amount_or_zero(""), Decimal::ZERO);
        assert_eq!(bill_amount_or_zero("abc"), Decimal::ZERO);
        assert_eq!(bill_amount_or_zero("-1"), Decimal::ZERO);
        assert_eq!(bill_amount_or_zero("1000000000000001"), Decimal::ZERO);
        assert_eq!(bill_amount_or_zero("42.10"), dec!(42.10));
    }

    #[test]
    fn is_valid_bill_text_only_checks_emptiness() {
        assert!(is_valid_bill_text("50"));
        assert!(is_valid_bill_text("abc"));
        assert!(!is_valid_bill_text(""));
        assert!(!is_valid_bill_text(" \t "));
    }
}
