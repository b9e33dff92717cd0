//! The currency table: every target currency a tile can convert into.
//!
//! Factors are expressed relative to the base currency (Indian Rupee):
//! one rupee buys `factor` units of the target currency.
//!
//! Structure:
//! - Constants: base currency glyphs, built-in rows
//! - Types: [`CurrencyDefinition`]
//! - Pure functions: lookup and validation

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Display glyph of the base currency.
pub const BASE_SYMBOL: &str = "₹";

/// Display name of the base currency.
pub const BASE_NAME: &str = "Rupee";

/// Built-in rows: (name, symbol, factor, flag).
///
/// Order is the on-screen order, three tiles per row.
const BUILTIN_ROWS: &[(&str, &str, f64, Option<&str>)] = &[
    ("DOLLAR", "$", 0.012, Some("🇺🇸")),
    ("EURO", "€", 0.011, Some("🇪🇺")),
    ("POUND", "£", 0.0095, Some("🇬🇧")),
    ("RUBEL", "₽", 0.93, Some("🇷🇺")),
    ("AUS DOLLAR", "A$", 0.018, Some("🇦🇺")),
    ("CAN DOLLAR", "C$", 0.016, Some("🇨🇦")),
    ("YEN", "¥", 1.54, Some("🇯🇵")),
    ("DINAR", "د.ك", 0.0037, Some("🇰🇼")),
    ("BITCOIN", "₿", 0.000_000_16, None),
];

static BUILTIN: OnceLock<Vec<CurrencyDefinition>> = OnceLock::new();

// ============================================================================
// TYPES
// ============================================================================

/// One target currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDefinition {
    /// Unique identifier, also the tile label.
    pub name: String,
    /// Glyph prefixed to converted amounts.
    pub symbol: String,
    /// Target units per one base unit. Always > 0.
    pub factor: f64,
    /// Decorative flag shown on the tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl CurrencyDefinition {
    pub fn new(name: &str, symbol: &str, factor: f64) -> Self {
        CurrencyDefinition {
            name: name.to_string(),
            symbol: symbol.to_string(),
            factor,
            flag: None,
        }
    }

    pub fn with_flag(mut self, flag: &str) -> Self {
        self.flag = Some(flag.to_string());
        self
    }

    /// Flag if present, otherwise the symbol. Used as the tile's icon.
    pub fn icon(&self) -> &str {
        self.flag.as_deref().unwrap_or(&self.symbol)
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// The compiled-in table. Built on first use, never mutated.
pub fn builtin_table() -> &'static [CurrencyDefinition] {
    BUILTIN.get_or_init(|| {
        BUILTIN_ROWS
            .iter()
            .map(|&(name, symbol, factor, flag)| {
                let def = CurrencyDefinition::new(name, symbol, factor);
                match flag {
                    Some(f) => def.with_flag(f),
                    None => def,
                }
            })
            .collect()
    })
}

/// Look up a currency by name, ignoring ASCII case.
pub fn find<'a>(table: &'a [CurrencyDefinition], name: &str) -> Option<&'a CurrencyDefinition> {
    table.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Check the table invariants: non-empty, unique non-blank names, positive factors.
pub fn validate_table(table: &[CurrencyDefinition]) -> Result<(), TableError> {
    if table.is_empty() {
        return Err(TableError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, currency) in table.iter().enumerate() {
        if currency.name.trim().is_empty() {
            return Err(TableError::BlankName { index });
        }
        if !seen.insert(currency.name.as_str()) {
            return Err(TableError::DuplicateName {
                name: currency.name.clone(),
            });
        }
        if !currency.factor.is_finite() || currency.factor <= 0.0 {
            return Err(TableError::InvalidFactor {
                name: currency.name.clone(),
                factor: currency.factor,
            });
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
