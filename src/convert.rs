//! Conversion core: parse the raw amount, multiply, round, format.
//!
//! Pure functions, no I/O. Both the interactive screen and the `convert`
//! command go through [`convert`], so they always agree on the result text.

use serde::Serialize;
use thiserror::Error;

use crate::currency::CurrencyDefinition;
use crate::notify::Severity;

/// Notice text for an empty amount field.
pub const MISSING_INPUT_MESSAGE: &str = "Enter a value to convert";

/// Notice text for an amount that is not a number.
pub const INVALID_NUMBER_MESSAGE: &str = "Not a valid number to convert";

/// Why a tile press could not produce a result.
///
/// These are input validation notices, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Enter a value to convert")]
    MissingInput,
    #[error("Not a valid number to convert")]
    InvalidNumber,
}

impl ConversionError {
    pub fn severity(self) -> Severity {
        match self {
            ConversionError::MissingInput => Severity::Error,
            ConversionError::InvalidNumber => Severity::Warning,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConversionError::MissingInput => MISSING_INPUT_MESSAGE,
            ConversionError::InvalidNumber => INVALID_NUMBER_MESSAGE,
        }
    }
}

/// A successful conversion into one target currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Target currency name.
    pub name: String,
    /// Target currency symbol.
    pub symbol: String,
    /// Parsed base amount.
    pub amount: f64,
    /// `amount * factor`, rounded to two decimals.
    pub value: f64,
    /// Display string, e.g. `"$ 1.20"`.
    pub text: String,
}

/// Parse an amount typed by the user.
///
/// Only a truly empty field is missing; whitespace alone is an invalid
/// number. Surrounding whitespace is ignored when parsing. Accepts an
/// optional sign and a `.` decimal separator regardless of locale.
/// Anything else, and non-finite values, is an invalid number.
pub fn parse_amount(raw: &str) -> Result<f64, ConversionError> {
    if raw.is_empty() {
        return Err(ConversionError::MissingInput);
    }

    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConversionError::InvalidNumber),
    }
}

/// Round half away from zero to two decimal places.
///
/// Negative zero collapses to zero so it never renders as `-0.00`.
/// Values too large to scale by 100 already have no fractional part and
/// are returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// `"{symbol} {value}"` with exactly two decimals.
///
/// `value` is expected to be already rounded with [`round2`].
pub fn format_result(symbol: &str, value: f64) -> String {
    format!("{} {:.2}", symbol, value)
}

/// Convert a raw amount into `currency`.
pub fn convert(raw: &str, currency: &CurrencyDefinition) -> Result<Conversion, ConversionError> {
    let amount = parse_amount(raw)?;
    let converted = amount * currency.factor;
    if !converted.is_finite() {
        return Err(ConversionError::InvalidNumber);
    }
    let value = round2(converted);

    Ok(Conversion {
        name: currency.name.clone(),
        symbol: currency.symbol.clone(),
        amount,
        value,
        text: format_result(&currency.symbol, value),
    })
}

// ============================================================================
// TESTS
// ============================================================================
