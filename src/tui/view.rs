//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::currency::BASE_SYMBOL;

use super::state::{App, GRID_COLUMNS};
use super::theme;
use super::tile::{currency_tile, TILE_HEIGHT};
use super::toast::Toast;

/// Placeholder shown in the empty amount field.
pub const INPUT_PLACEHOLDER: &str = "Enter amount in Rupees";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole converter screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let state = app.screen.state();
    let result_height = if state.has_result() { 2 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(1),             // title
        Constraint::Length(3),             // amount input
        Constraint::Length(result_height), // result (hidden when empty)
        Constraint::Min(0),                // tile grid
        Constraint::Length(1),             // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    render_input(&state.raw_input, frame, chunks[1]);
    if state.has_result() {
        frame.render_widget(render_result(&state.result_text), chunks[2]);
    }
    render_grid(app, frame, chunks[3]);
    frame.render_widget(render_help(), chunks[4]);

    if let Some(toast) = app.screen.sink().current() {
        render_toast(toast, frame, chunks[3]);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("Currency Converter", theme::STYLE_TITLE),
        Span::styled("  from Rupees", theme::STYLE_DIM),
    ]))
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "[0-9 .] amount  [Bksp] delete  [^U] clear  [←↑↓→/hjkl] move  [Enter/Space] convert  [q] quit",
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// AMOUNT INPUT
// ============================================================================

fn render_input(raw_input: &str, frame: &mut Frame, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Length(3), // base glyph
        Constraint::Min(0),    // input box
    ])
    .split(area);

    let glyph = Paragraph::new(Span::styled(BASE_SYMBOL, theme::STYLE_BASE_SYMBOL))
        .alignment(Alignment::Center)
        .block(Block::new().padding(ratatui::widgets::Padding::top(1)));
    frame.render_widget(glyph, chunks[0]);

    let content = if raw_input.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, theme::STYLE_DIM)
    } else {
        Span::raw(raw_input)
    };
    let input = Paragraph::new(content)
        .block(Block::bordered().border_style(theme::STYLE_INPUT_BORDER));
    frame.render_widget(input, chunks[1]);

    // Caret after the last typed character
    let caret_x = chunks[1].x + 1 + raw_input.chars().count() as u16;
    if caret_x < chunks[1].right().saturating_sub(1) {
        frame.set_cursor_position((caret_x, chunks[1].y + 1));
    }
}

// ============================================================================
// RESULT
// ============================================================================

fn render_result(result_text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(result_text, theme::STYLE_RESULT))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

// ============================================================================
// TILE GRID
// ============================================================================

/// First grid row to draw so the focused row stays visible.
fn first_visible_row(cursor_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || cursor_row < visible_rows {
        0
    } else {
        cursor_row + 1 - visible_rows
    }
}

fn render_grid(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.screen.state();
    let total_rows = app.table.len().div_ceil(GRID_COLUMNS);
    let visible_rows = (area.height / TILE_HEIGHT) as usize;
    let first = first_visible_row(app.cursor / GRID_COLUMNS, visible_rows);

    let rows = app
        .table
        .chunks(GRID_COLUMNS)
        .enumerate()
        .skip(first)
        .take(visible_rows.min(total_rows));

    for (row_index, row) in rows {
        let y = area.y + ((row_index - first) as u16) * TILE_HEIGHT;
        let row_area = Rect::new(area.x, y, area.width, TILE_HEIGHT);
        let cells = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);

        for (col, currency) in row.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col;
            let tile = currency_tile(
                currency,
                state.is_selected(&currency.name),
                index == app.cursor,
            );
            frame.render_widget(tile, cells[col]);
        }
    }
}

// ============================================================================
// TOAST
// ============================================================================

/// Draw the toast over the bottom of `area`, full width.
fn render_toast(toast: &Toast, frame: &mut Frame, area: Rect) {
    if area.height < 3 {
        return;
    }
    let toast_area = Rect::new(area.x, area.bottom() - 3, area.width, 3);
    let style = theme::toast_style(toast.severity);

    let widget = Paragraph::new(Line::from(toast.message.as_str()))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(style));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(widget, toast_area);
}

// ============================================================================
// TESTS
// ============================================================================
