//! Transient notifications: the capability the converter screen reports
//! validation notices through.
//!
//! The screen never draws anything itself. It hands a message and a
//! severity to whatever [`NotificationSink`] it was built with: the
//! terminal toast tray, a no-op, or a recorder in tests.

use ratatui::style::Color;

/// Visual severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Amber: input present but unusable.
    Warning,
    /// Red: input missing.
    Error,
}

impl Severity {
    /// Background colour of the notice.
    pub fn background(self) -> Color {
        match self {
            Severity::Warning => Color::Rgb(0xF4, 0xBE, 0x2C),
            Severity::Error => Color::Rgb(0xEA, 0x77, 0x73),
        }
    }

    /// Text colour of the notice.
    pub fn foreground(self) -> Color {
        Color::Rgb(0x00, 0x00, 0x00)
    }
}

/// Fire-and-forget surface for short-lived messages.
///
/// Implementations must not block; the screen stays interactive.
pub trait NotificationSink {
    fn show(&mut self, message: &str, severity: Severity);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &mut T {
    fn show(&mut self, message: &str, severity: Severity) {
        (**self).show(message, severity);
    }
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn show(&mut self, _message: &str, _severity: Severity) {}
}

/// Keeps every notice in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub shown: Vec<(String, Severity)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent notice, if any.
    pub fn last(&self) -> Option<(&str, Severity)> {
        self.shown.last().map(|(m, s)| (m.as_str(), *s))
    }
}

impl NotificationSink for RecordingSink {
    fn show(&mut self, message: &str, severity: Severity) {
        self.shown.push((message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colours_match_notice_palette() {
        assert_eq!(Severity::Warning.background(), Color::Rgb(0xF4, 0xBE, 0x2C));
        assert_eq!(Severity::Error.background(), Color::Rgb(0xEA, 0x77, 0x73));
        assert_eq!(Severity::Error.foreground(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.show("first", Severity::Error);
        sink.show("second", Severity::Warning);
        assert_eq!(sink.shown.len(), 2);
        assert_eq!(sink.last(), Some(("second", Severity::Warning)));
    }

    #[test]
    fn mutable_reference_forwards_to_sink() {
        fn notify<S: NotificationSink>(mut sink: S) {
            sink.show("hello", Severity::Error);
        }

        let mut sink = RecordingSink::new();
        notify(&mut sink);
        assert_eq!(sink.last(), Some(("hello", Severity::Error)));
    }
}
