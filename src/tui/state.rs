//! TUI state algebra: the model the update and view layers share.
//!
//! The conversion state itself lives in [`ConverterScreen`]; this module
//! adds what only the terminal needs: the focus cursor on the tile grid,
//! the toast tray, and the quit flag.

use crossterm::event::KeyEvent;

use crate::currency::CurrencyDefinition;
use crate::screen::ConverterScreen;

use super::toast::ToastTray;

/// Tiles per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Longest amount the input field accepts, in characters.
pub const MAX_INPUT_LEN: usize = 14;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - A ticker thread sends `Tick` to age toasts
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Periodic clock tick.
    Tick,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Converter screen, reporting notices into the toast tray.
    pub screen: ConverterScreen<ToastTray>,

    /// Currency table, fixed for the lifetime of the app.
    pub table: Vec<CurrencyDefinition>,

    /// Index of the focused tile.
    pub cursor: usize,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the amount.
    Type(char),
    /// Delete the last character of the amount.
    Backspace,
    /// Empty the amount field.
    ClearInput,
    /// Move tile focus.
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Press the focused tile.
    Press,
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh app with focus on the first tile and nothing converted.
    pub fn new(table: Vec<CurrencyDefinition>) -> Self {
        App {
            screen: ConverterScreen::new(ToastTray::default()),
            table,
            cursor: 0,
            should_quit: false,
        }
    }

    /// The tile under the focus cursor.
    pub fn focused(&self) -> Option<&CurrencyDefinition> {
        self.table.get(self.cursor)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::builtin_table;

    #[test]
    fn new_app_focuses_first_tile() {
        let app = App::new(builtin_table().to_vec());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.focused().map(|c| c.name.as_str()), Some("DOLLAR"));
        assert!(!app.should_quit);
        assert!(app.screen.sink().current().is_none());
    }

    #[test]
    fn empty_table_has_no_focus() {
        let app = App::new(Vec::new());
        assert!(app.focused().is_none());
    }

    #[test]
    fn action_equality_for_matching() {
        assert_eq!(Action::Type('1'), Action::Type('1'));
        assert_ne!(Action::Type('1'), Action::Type('2'));
        assert_ne!(Action::MoveUp, Action::MoveDown);
    }
}
