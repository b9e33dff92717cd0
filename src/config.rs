//! Rates configuration: where the currency table comes from.
//!
//! Resolution order:
//! 1. An explicit `--rates FILE`
//! 2. `<config dir>/rupee-convert/currencies.json`, if present
//! 3. The built-in table
//!
//! The table is resolved once at startup and never reloaded.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::currency::{builtin_table, validate_table, CurrencyDefinition};
use crate::error::ConfigError;

/// Application directory name under the platform config/data dirs.
pub const APP_DIR: &str = "rupee-convert";

/// Rates filename looked up in the config directory.
pub const RATES_FILENAME: &str = "currencies.json";

/// Log filename used by the interactive screen.
pub const LOG_FILENAME: &str = "rupee-convert.log";

/// On-disk shape of a rates file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesFile {
    pub currencies: Vec<CurrencyDefinition>,
}

/// Where the active table was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Builtin,
    File(PathBuf),
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSource::Builtin => write!(f, "built-in rates"),
            TableSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved currency table plus its origin.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub currencies: Vec<CurrencyDefinition>,
    pub source: TableSource,
}

// ============================================================================
// PURE FUNCTIONS (Paths)
// ============================================================================

/// Default rates file location, if the platform has a config dir.
pub fn default_rates_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(RATES_FILENAME))
}

/// Default log file for the interactive screen.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(LOG_FILENAME)
}

// ============================================================================
// EFFECT FUNCTIONS (Loading)
// ============================================================================

/// Read and validate a rates file.
pub fn load_rates_file(path: &Path) -> Result<Vec<CurrencyDefinition>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rates: RatesFile = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_table(&rates.currencies).map_err(|source| ConfigError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(rates.currencies)
}

/// Resolve the currency table.
///
/// An explicit path must load. The default path is only used if it exists.
pub fn resolve_table(explicit: Option<&Path>) -> Result<LoadedTable, ConfigError> {
    resolve_table_with_default(explicit, default_rates_path().as_deref())
}

/// Resolve the currency table against a given default location.
///
/// Separated for testability: tests inject a temp config path.
pub fn resolve_table_with_default(
    explicit: Option<&Path>,
    default: Option<&Path>,
) -> Result<LoadedTable, ConfigError> {
    let chosen = match (explicit, default) {
        (Some(path), _) => Some(path),
        (None, Some(path)) if path.is_file() => Some(path),
        _ => None,
    };

    let loaded = match chosen {
        Some(path) => LoadedTable {
            currencies: load_rates_file(path)?,
            source: TableSource::File(path.to_path_buf()),
        },
        None => LoadedTable {
            currencies: builtin_table().to_vec(),
            source: TableSource::Builtin,
        },
    };

    info!(
        source = %loaded.source,
        currencies = loaded.currencies.len(),
        "currency table loaded"
    );
    Ok(loaded)
}

// ============================================================================
// TESTS
// ============================================================================
