//! The converter screen: the only stateful component.
//!
//! State changes only through the two handlers. The result and selection
//! are deliberately left as they are when the input is edited afterwards;
//! the label shows the last pressed conversion until the next press.

use tracing::debug;

use crate::convert::convert;
use crate::currency::CurrencyDefinition;
use crate::notify::NotificationSink;

/// Everything the screen remembers between events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionState {
    /// Text currently in the amount field. Untrusted.
    pub raw_input: String,
    /// Last successful result, empty until the first one.
    pub result_text: String,
    /// Name of the highlighted tile, empty until the first success.
    pub selected_name: String,
}

impl ConversionState {
    /// True if `name` is the highlighted tile.
    pub fn is_selected(&self, name: &str) -> bool {
        !self.selected_name.is_empty() && self.selected_name == name
    }

    pub fn has_result(&self) -> bool {
        !self.result_text.is_empty()
    }
}

/// Converter screen with an injected notification sink.
#[derive(Debug)]
pub struct ConverterScreen<S> {
    state: ConversionState,
    sink: S,
}

impl<S: NotificationSink> ConverterScreen<S> {
    pub fn new(sink: S) -> Self {
        ConverterScreen {
            state: ConversionState::default(),
            sink,
        }
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Replace the amount text verbatim. Never fails.
    pub fn on_input_changed(&mut self, text: impl Into<String>) {
        self.state.raw_input = text.into();
    }

    /// Convert the current amount into `currency`.
    ///
    /// On success the result and selection follow `currency`. On a missing
    /// or invalid amount a notice goes to the sink and nothing else changes.
    pub fn on_tile_pressed(&mut self, currency: &CurrencyDefinition) {
        match convert(&self.state.raw_input, currency) {
            Ok(conversion) => {
                debug!(
                    currency = %conversion.name,
                    amount = conversion.amount,
                    result = %conversion.text,
                    "converted"
                );
                self.state.result_text = conversion.text;
                self.state.selected_name = conversion.name;
            }
            Err(notice) => {
                self.sink.show(notice.message(), notice.severity());
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{RecordingSink, Severity};

    fn screen() -> ConverterScreen<RecordingSink> {
        ConverterScreen::new(RecordingSink::new())
    }

    fn euro() -> CurrencyDefinition {
        CurrencyDefinition::new("EURO", "€", 0.011)
    }

    #[test]
    fn starts_empty() {
        let s = screen();
        assert_eq!(s.state(), &ConversionState::default());
        assert!(!s.state().has_result());
        assert!(s.sink().shown.is_empty());
    }

    #[test]
    fn input_is_stored_verbatim() {
        let mut s = screen();
        s.on_input_changed(" 12x ");
        assert_eq!(s.state().raw_input, " 12x ");
        assert!(s.sink().shown.is_empty());
    }

    #[test]
    fn press_converts_and_selects() {
        let mut s = screen();
        s.on_input_changed("200");
        s.on_tile_pressed(&euro());
        assert_eq!(s.state().result_text, "€ 2.20");
        assert!(s.state().is_selected("EURO"));
        assert!(s.sink().shown.is_empty());
    }

    #[test]
    fn missing_input_keeps_previous_result() {
        let mut s = screen();
        s.on_input_changed("200");
        s.on_tile_pressed(&euro());
        s.on_input_changed("");
        s.on_tile_pressed(&CurrencyDefinition::new("YEN", "¥", 1.54));

        assert_eq!(s.state().result_text, "€ 2.20");
        assert_eq!(s.state().selected_name, "EURO");
        assert_eq!(s.sink().last(), Some(("Enter a value to convert", Severity::Error)));
    }

    #[test]
    fn editing_input_leaves_result_stale() {
        let mut s = screen();
        s.on_input_changed("200");
        s.on_tile_pressed(&euro());
        s.on_input_changed("5");
        assert_eq!(s.state().result_text, "€ 2.20");
        assert_eq!(s.state().selected_name, "EURO");
    }

    #[test]
    fn nothing_is_selected_before_first_success() {
        let s = screen();
        assert!(!s.state().is_selected(""));
        assert!(!s.state().is_selected("EURO"));
    }

    #[test]
    fn whitespace_only_input_warns_as_invalid() {
        let mut s = screen();
        s.on_input_changed("200");
        s.on_tile_pressed(&euro());
        s.on_input_changed("   ");
        s.on_tile_pressed(&euro());

        assert_eq!(s.state().result_text, "€ 2.20");
        assert_eq!(
            s.sink().last(),
            Some(("Not a valid number to convert", Severity::Warning))
        );
    }

    #[test]
    fn overflowing_amount_warns_and_keeps_result() {
        let mut s = screen();
        s.on_input_changed("1.7e308");
        s.on_tile_pressed(&CurrencyDefinition::new("YEN", "¥", 1.54));

        assert!(!s.state().has_result());
        assert_eq!(s.state().selected_name, "");
        assert_eq!(
            s.sink().last(),
            Some(("Not a valid number to convert", Severity::Warning))
        );
    }
}
