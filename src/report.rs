//! Output formatting for the `convert` and `list` commands.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::convert::Conversion;
use crate::currency::{CurrencyDefinition, BASE_SYMBOL};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable aligned columns.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Format conversions of one amount into several currencies.
pub fn format_conversions(conversions: &[Conversion], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_conversions_human(conversions),
        OutputFormat::Json => to_json(&conversions),
    }
}

/// Format the currency table.
pub fn format_table(table: &[CurrencyDefinition], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_table_human(table),
        OutputFormat::Json => to_json(&table),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}

fn format_conversions_human(conversions: &[Conversion]) -> String {
    let Some(first) = conversions.first() else {
        return String::new();
    };

    let width = name_width(conversions.iter().map(|c| c.name.as_str()));
    let mut out = format!("{} {:.2}\n", BASE_SYMBOL, first.amount);
    for c in conversions {
        out.push_str(&format!("  {:<width$}  {}\n", c.name, c.text, width = width));
    }
    out
}

fn format_table_human(table: &[CurrencyDefinition]) -> String {
    let width = name_width(table.iter().map(|c| c.name.as_str()));
    let mut out = String::new();
    for c in table {
        out.push_str(&format!(
            "{:<width$}  {:<4} {} 1 = {} {}\n",
            c.name,
            c.symbol,
            BASE_SYMBOL,
            c.symbol,
            c.factor,
            width = width
        ));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        // This should never happen with our types, but fail explicitly
        panic!("Failed to serialize output to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
