//! rupee-convert: convert an amount in Rupees into a fixed set of currencies.

pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod logging;
pub mod notify;
pub mod report;
pub mod screen;
pub mod tui;
