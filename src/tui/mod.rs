//! Interactive terminal rendition of the converter screen.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: App model, actions, events
//! - `update`: transitions driven by actions
//! - `view`, `tile`, `theme`: pure rendering
//! - `toast`: the notification surface
//! - `run`: effects (terminal, threads, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod tile;
pub mod toast;
pub mod update;
pub mod view;

pub use run::run;
