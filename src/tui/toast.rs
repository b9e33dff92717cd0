//! Toast tray: the terminal's notification surface.
//!
//! Holds at most one toast. A new notice replaces the current one, and
//! each toast disappears on its own after [`TOAST_TICKS`] clock ticks.

use crate::notify::{NotificationSink, Severity};

/// Lifetime of a toast in ticks (12 × 250 ms ≈ 3 s).
pub const TOAST_TICKS: u16 = 12;

/// A visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    remaining: u16,
}

impl Toast {
    pub fn remaining(&self) -> u16 {
        self.remaining
    }
}

#[derive(Debug, Default)]
pub struct ToastTray {
    current: Option<Toast>,
}

impl ToastTray {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Age the current toast by one tick, dropping it when it expires.
    pub fn tick(&mut self) {
        if let Some(toast) = &mut self.current {
            toast.remaining = toast.remaining.saturating_sub(1);
            if toast.remaining == 0 {
                self.current = None;
            }
        }
    }
}

impl NotificationSink for ToastTray {
    fn show(&mut self, message: &str, severity: Severity) {
        self.current = Some(Toast {
            message: message.to_string(),
            severity,
            remaining: TOAST_TICKS,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_expire() {
        let mut tray = ToastTray::default();
        tray.show("Enter a value to convert", Severity::Error);
        assert_eq!(tray.current().map(|t| t.remaining()), Some(TOAST_TICKS));

        for _ in 0..TOAST_TICKS - 1 {
            tray.tick();
        }
        assert!(tray.current().is_some());

        tray.tick();
        assert!(tray.current().is_none());
    }

    #[test]
    fn newer_toast_replaces_older() {
        let mut tray = ToastTray::default();
        tray.show("first", Severity::Error);
        tray.tick();
        tray.show("second", Severity::Warning);

        let toast = tray.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.severity, Severity::Warning);
        assert_eq!(toast.remaining(), TOAST_TICKS);
    }

    #[test]
    fn tick_without_toast_is_noop() {
        let mut tray = ToastTray::default();
        tray.tick();
        assert!(tray.current().is_none());
    }
}
