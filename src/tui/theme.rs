//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Pale yellow: the selected tile (last successful conversion)
//! - Cyan: keyboard focus
//! - Amber / red: notices, see [`Severity`]
//! - Dim: placeholder and help text
//! - Bold: the amount glyph and the result

use ratatui::style::{Color, Modifier, Style};

use crate::notify::Severity;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// De-emphasized text, dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text, bold white.
pub const STYLE_IMPORTANT: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Base currency glyph beside the input field.
pub const STYLE_BASE_SYMBOL: Style = STYLE_IMPORTANT;

/// Amount input box border.
pub const STYLE_INPUT_BORDER: Style = Style::new().fg(Color::White);

/// Result label.
pub const STYLE_RESULT: Style = STYLE_IMPORTANT;

/// Unselected tile.
pub const STYLE_TILE: Style = Style::new().fg(Color::Black).bg(Color::White);

/// Tile matching the last successful conversion.
pub const STYLE_TILE_SELECTED: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Rgb(0xFF, 0xEA, 0xA7));

/// Border of the focused tile.
pub const STYLE_FOCUS: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Toast colours for a notice severity.
pub fn toast_style(severity: Severity) -> Style {
    Style::new()
        .fg(severity.foreground())
        .bg(severity.background())
        .add_modifier(Modifier::BOLD)
}

// ============================================================================
// TESTS
// ============================================================================
