use std::io::IsTerminal;

use colored::{Color, Colorize};

/// Colours used by the frame and the status messages. With `use_color` off
/// every helper returns the text unchanged.
#[derive(Debug, Clone)]
pub struct UiStyle {
    pub use_color: bool,
    pub color_border: Color,
    pub color_accent: Color,
}

impl UiStyle {
    /// Colours only when enabled and stdout is a terminal.
    pub fn detect(color_enabled: bool) -> Self {
        let use_color = color_enabled && std::io::stdout().is_terminal();
        Self::with_color(use_color)
    }

    pub fn plain() -> Self {
        Self::with_color(false)
    }

    fn with_color(use_color: bool) -> Self {
        Self {
            use_color,
            color_border: Color::BrightBlue,
            color_accent: Color::BrightCyan,
        }
    }

    pub fn border(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_border).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn title(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_accent).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn highlight(&self, text: &str) -> String {
        self.title(text)
    }

    pub fn accent(&self, text: &str) -> String {
        if self.use_color {
            text.color(self.color_accent).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
