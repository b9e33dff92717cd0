//! Error types for rupee-convert.
//!
//! One enum per concern. The two conversion notices live in
//! [`crate::convert::ConversionError`] since they are validation outcomes
//! the screen handles in place, not failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::convert::ConversionError;

/// A currency table violates one of its invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("currency table is empty")]
    Empty,

    #[error("currency at position {index} has a blank name")]
    BlankName { index: usize },

    #[error("currency name {name:?} appears more than once")]
    DuplicateName { name: String },

    #[error("currency {name:?} has invalid factor {factor} (must be finite and > 0)")]
    InvalidFactor { name: String, factor: f64 },
}

/// Loading a rates file failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read rates file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse rates file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("rates file {} is invalid: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

/// Top-level error surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("unknown currency {0:?} (try `rupee-convert list`)")]
    UnknownCurrency(String),

    #[error("cannot set up logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
