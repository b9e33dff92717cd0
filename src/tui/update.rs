//! State transitions: (App, Action) → App.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Amount edits and tile presses are forwarded to the converter screen's
//! handlers; focus movement and quitting are handled here.

use super::state::{Action, App, GRID_COLUMNS, MAX_INPUT_LEN};

/// Apply one user action to the app.
pub fn update(app: &mut App, action: &Action) {
    match action {
        Action::Type(c) => type_char(app, *c),
        Action::Backspace => {
            let mut text = app.screen.state().raw_input.clone();
            if text.pop().is_some() {
                app.screen.on_input_changed(text);
            }
        }
        Action::ClearInput => {
            if !app.screen.state().raw_input.is_empty() {
                app.screen.on_input_changed(String::new());
            }
        }
        Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {
            app.cursor = move_cursor(app.cursor, app.table.len(), action);
        }
        Action::Press => {
            if let Some(currency) = app.table.get(app.cursor) {
                app.screen.on_tile_pressed(currency);
            }
        }
        Action::Quit => app.should_quit = true,
    }
}

/// Advance the toast clock.
pub fn handle_tick(app: &mut App) {
    app.screen.sink_mut().tick();
}

// ============================================================================
// INPUT FIELD
// ============================================================================

/// The amount field takes digits and a decimal point only.
pub fn accepts_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn type_char(app: &mut App, c: char) {
    if !accepts_char(c) {
        return;
    }
    let current = &app.screen.state().raw_input;
    if current.chars().count() >= MAX_INPUT_LEN {
        return;
    }
    let mut text = current.clone();
    text.push(c);
    app.screen.on_input_changed(text);
}

// ============================================================================
// GRID FOCUS
// ============================================================================

/// Move the focus cursor within a grid of `len` tiles, clamped at edges.
fn move_cursor(cursor: usize, len: usize, action: &Action) -> usize {
    if len == 0 {
        return 0;
    }
    let column = cursor % GRID_COLUMNS;

    match action {
        Action::MoveLeft if column > 0 => cursor - 1,
        Action::MoveRight if column + 1 < GRID_COLUMNS && cursor + 1 < len => cursor + 1,
        Action::MoveUp if cursor >= GRID_COLUMNS => cursor - GRID_COLUMNS,
        Action::MoveDown if cursor + GRID_COLUMNS < len => cursor + GRID_COLUMNS,
        _ => cursor,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::builtin_table;
    use crate::notify::Severity;

    fn app() -> App {
        App::new(builtin_table().to_vec())
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            update(app, &Action::Type(c));
        }
    }

    // -- Input --

    #[test]
    fn typing_builds_amount() {
        let mut app = app();
        type_str(&mut app, "12.5");
        assert_eq!(app.screen.state().raw_input, "12.5");
    }

    #[test]
    fn non_numeric_keys_are_ignored() {
        let mut app = app();
        type_str(&mut app, "1a-2");
        assert_eq!(app.screen.state().raw_input, "12");
    }

    #[test]
    fn input_stops_at_max_length() {
        let mut app = app();
        type_str(&mut app, "1234567890123456");
        assert_eq!(app.screen.state().raw_input.len(), MAX_INPUT_LEN);
        assert_eq!(app.screen.state().raw_input, "12345678901234");
    }

    #[test]
    fn backspace_and_clear() {
        let mut app = app();
        type_str(&mut app, "123");
        update(&mut app, &Action::Backspace);
        assert_eq!(app.screen.state().raw_input, "12");
        update(&mut app, &Action::ClearInput);
        assert_eq!(app.screen.state().raw_input, "");
        update(&mut app, &Action::Backspace);
        assert_eq!(app.screen.state().raw_input, "");
    }

    // -- Grid focus --

    #[test]
    fn cursor_moves_within_grid() {
        let mut app = app();
        update(&mut app, &Action::MoveRight);
        assert_eq!(app.cursor, 1);
        update(&mut app, &Action::MoveDown);
        assert_eq!(app.cursor, 4);
        update(&mut app, &Action::MoveLeft);
        assert_eq!(app.cursor, 3);
        update(&mut app, &Action::MoveUp);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn cursor_clamps_at_edges() {
        assert_eq!(move_cursor(0, 9, &Action::MoveLeft), 0);
        assert_eq!(move_cursor(0, 9, &Action::MoveUp), 0);
        assert_eq!(move_cursor(2, 9, &Action::MoveRight), 2);
        assert_eq!(move_cursor(8, 9, &Action::MoveDown), 8);
    }

    #[test]
    fn cursor_respects_partial_last_row() {
        // 7 tiles: last row holds only index 6
        assert_eq!(move_cursor(4, 7, &Action::MoveDown), 4);
        assert_eq!(move_cursor(3, 7, &Action::MoveDown), 6);
        assert_eq!(move_cursor(6, 7, &Action::MoveRight), 6);
    }

    #[test]
    fn cursor_on_empty_table_stays_zero() {
        assert_eq!(move_cursor(0, 0, &Action::MoveDown), 0);
    }

    // -- Press --

    #[test]
    fn press_converts_focused_tile() {
        let mut app = app();
        type_str(&mut app, "100");
        update(&mut app, &Action::Press);
        assert_eq!(app.screen.state().result_text, "$ 1.20");
        assert_eq!(app.screen.state().selected_name, "DOLLAR");
    }

    #[test]
    fn press_with_empty_input_shows_toast() {
        let mut app = app();
        update(&mut app, &Action::Press);
        let toast = app.screen.sink().current().expect("toast expected");
        assert_eq!(toast.message, "Enter a value to convert");
        assert_eq!(toast.severity, Severity::Error);
        assert!(app.screen.state().result_text.is_empty());
    }

    #[test]
    fn press_with_malformed_number_shows_warning() {
        let mut app = app();
        type_str(&mut app, "1.2.3");
        update(&mut app, &Action::Press);
        let toast = app.screen.sink().current().expect("toast expected");
        assert_eq!(toast.message, "Not a valid number to convert");
        assert_eq!(toast.severity, Severity::Warning);
    }

    #[test]
    fn switching_tiles_moves_selection() {
        let mut app = app();
        type_str(&mut app, "100");
        update(&mut app, &Action::Press);
        update(&mut app, &Action::MoveRight);
        update(&mut app, &Action::Press);
        assert_eq!(app.screen.state().selected_name, "EURO");
        assert_eq!(app.screen.state().result_text, "€ 1.10");
    }

    #[test]
    fn tick_expires_toast() {
        let mut app = app();
        update(&mut app, &Action::Press);
        for _ in 0..crate::tui::toast::TOAST_TICKS {
            handle_tick(&mut app);
        }
        assert!(app.screen.sink().current().is_none());
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = app();
        update(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }
}
