//! Currency tile: one cell of the grid.
//!
//! Pure function from a currency definition (plus two display flags) to a
//! widget. No state of its own.

use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::currency::CurrencyDefinition;

use super::theme;

/// Tile height in rows: border, label, border.
pub const TILE_HEIGHT: u16 = 3;

/// Build the tile for `currency`.
///
/// `selected` marks the last converted currency; `focused` marks the
/// tile the keyboard cursor is on.
pub fn currency_tile(currency: &CurrencyDefinition, selected: bool, focused: bool) -> Paragraph<'_> {
    let base = if selected {
        theme::STYLE_TILE_SELECTED
    } else {
        theme::STYLE_TILE
    };

    let block = if focused {
        Block::bordered().border_style(theme::STYLE_FOCUS)
    } else {
        Block::bordered().border_style(base)
    };

    let label = Line::from(vec![
        Span::raw(currency.icon()),
        Span::raw(" "),
        Span::raw(currency.name.as_str()),
    ]);

    Paragraph::new(label)
        .style(base)
        .alignment(Alignment::Center)
        .block(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;

    fn draw(currency: &CurrencyDefinition, selected: bool, focused: bool) -> Buffer {
        let area = Rect::new(0, 0, 20, TILE_HEIGHT);
        let mut buf = Buffer::empty(area);
        currency_tile(currency, selected, focused).render(area, &mut buf);
        buf
    }

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol().to_string()).collect()
    }

    #[test]
    fn tile_shows_symbol_and_name() {
        let buf = draw(&CurrencyDefinition::new("YEN", "¥", 1.54), false, false);
        assert!(text(&buf).contains("¥ YEN"));
    }

    #[test]
    fn selected_tile_uses_highlight_background() {
        let yen = CurrencyDefinition::new("YEN", "¥", 1.54);
        let plain = draw(&yen, false, false);
        let selected = draw(&yen, true, false);

        assert_eq!(plain[(10, 1)].bg, Color::White);
        assert_eq!(selected[(10, 1)].bg, Color::Rgb(0xFF, 0xEA, 0xA7));
    }

    #[test]
    fn focused_tile_has_cyan_border() {
        let buf = draw(&CurrencyDefinition::new("YEN", "¥", 1.54), false, true);
        assert_eq!(buf[(0, 0)].fg, Color::Cyan);
    }
}
