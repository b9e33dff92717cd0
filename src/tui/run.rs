//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Ticker thread: sends a tick every [`TICK_RATE`] to age toasts
//! The event loop consumes from the channel, dispatching to update.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::currency::CurrencyDefinition;

use super::state::{Action, App, AppEvent};
use super::update::{handle_tick, update};
use super::view::render;

/// Interval between clock ticks.
pub const TICK_RATE: Duration = Duration::from_millis(250);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ClearInput),
            _ => None,
        };
    }

    match key.code {
        // Amount field
        KeyCode::Char(c @ ('0'..='9' | '.')) => Some(Action::Type(c)),
        KeyCode::Backspace => Some(Action::Backspace),

        // Grid focus
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),

        // Convert
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Press),

        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                // Windows reports releases too; only presses count
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, releases
                Err(_) => break,
            }
        }
    });
}

/// Spawn a thread that sends a tick every `TICK_RATE`.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK_RATE);
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the converter screen until the user quits.
pub fn run(table: Vec<CurrencyDefinition>) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(table);
    info!(currencies = app.table.len(), "converter screen started");

    let (tx, rx) = mpsc::channel::<AppEvent>();

    spawn_key_reader(tx.clone());
    spawn_ticker(tx);

    let result = event_loop(&mut terminal, &mut app, &rx);

    restore_terminal()?;
    info!("converter screen closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rx: &mpsc::Receiver<AppEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => return Ok(()), // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    debug!(?action, "key action");
                    update(app, &action);
                }
            }
            AppEvent::Tick => handle_tick(app),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn ctrl_u_clears_input() {
        let key = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::ClearInput));
    }

    #[test]
    fn digits_and_point_type_into_amount() {
        for c in "0123456789.".chars() {
            assert_eq!(map_key(key(KeyCode::Char(c))), Some(Action::Type(c)));
        }
    }

    #[test]
    fn vim_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Char('h'))), Some(Action::MoveLeft));
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Char('l'))), Some(Action::MoveRight));
    }

    #[test]
    fn arrow_keys_map_to_movement() {
        assert_eq!(map_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(map_key(key(KeyCode::Left)), Some(Action::MoveLeft));
        assert_eq!(map_key(key(KeyCode::Right)), Some(Action::MoveRight));
    }

    #[test]
    fn enter_and_space_press_tile() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Action::Press));
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Action::Press));
    }

    #[test]
    fn esc_and_q_quit() {
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn unmapped_key_returns_none() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
        assert_eq!(map_key(key(KeyCode::Tab)), None);
    }
}
