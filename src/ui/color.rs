// Mon Oct 19 2026 - Alex

use super::Ui;
use crate::error::UiError;
use colored::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiColor {
    pub color: Option<Color>,
    pub bold: bool,
}

impl UiColor {
    pub const NONE: UiColor = UiColor { color: None, bold: false };
    pub const RED: UiColor = UiColor { color: Some(Color::Red), bold: false };
    pub const GREEN: UiColor = UiColor { color: Some(Color::Green), bold: false };
    pub const YELLOW: UiColor = UiColor { color: Some(Color::Yellow), bold: false };
    pub const MAGENTA: UiColor = UiColor { color: Some(Color::Magenta), bold: false };
    pub const CYAN: UiColor = UiColor { color: Some(Color::Cyan), bold: false };

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn paint(&self, text: &str) -> String {
        match self.color {
            Some(color) => {
                let bold = if self.bold { "1;" } else { "" };
                format!("\x1B[{}{}m{}\x1B[0m", bold, color.to_fg_str(), text)
            }
            None => text.to_string(),
        }
    }
}

impl Default for UiColor {
    fn default() -> Self {
        Self::NONE
    }
}

/// Decorates another UI with per-channel color.
///
/// Whether the terminal can render color is decided by the caller and passed
/// in as `enabled`; with color disabled every message passes through untouched.
pub struct ColoredUi<U: Ui> {
    inner: U,
    enabled: bool,
    pub output_color: UiColor,
    pub info_color: UiColor,
    pub error_color: UiColor,
    pub warn_color: UiColor,
}

impl<U: Ui> ColoredUi<U> {
    pub fn new(inner: U, enabled: bool) -> Self {
        Self {
            inner,
            enabled,
            output_color: UiColor::NONE,
            info_color: UiColor::NONE,
            error_color: UiColor::RED,
            warn_color: UiColor::YELLOW,
        }
    }

    pub fn with_output_color(mut self, color: UiColor) -> Self {
        self.output_color = color;
        self
    }

    pub fn with_info_color(mut self, color: UiColor) -> Self {
        self.info_color = color;
        self
    }

    pub fn with_error_color(mut self, color: UiColor) -> Self {
        self.error_color = color;
        self
    }

    pub fn with_warn_color(mut self, color: UiColor) -> Self {
        self.warn_color = color;
        self
    }

    fn colorize(&self, message: &str, color: UiColor) -> String {
        if self.enabled {
            color.paint(message)
        } else {
            message.to_string()
        }
    }
}

impl<U: Ui> Ui for ColoredUi<U> {
    fn output(&self, message: &str) {
        self.inner.output(&self.colorize(message, self.output_color));
    }

    fn info(&self, message: &str) {
        self.inner.info(&self.colorize(message, self.info_color));
    }

    fn error(&self, message: &str) {
        self.inner.error(&self.colorize(message, self.error_color));
    }

    fn warn(&self, message: &str) {
        self.inner.warn(&self.colorize(message, self.warn_color));
    }

    fn ask(&self, query: &str) -> Result<String, UiError> {
        self.inner.ask(&self.colorize(query, self.output_color))
    }

    fn ask_secret(&self, query: &str) -> Result<String, UiError> {
        self.inner.ask_secret(&self.colorize(query, self.output_color))
    }
}
