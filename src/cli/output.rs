use colored::Colorize;
use std::{
    fmt,
    io::{self, Write},
};

use crate::cli::ui::UiStyle;

/// Message categories used for the closing report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "✓",
        MessageKind::Error => "✖",
    }
}

pub fn format_message(kind: MessageKind, message: impl fmt::Display, style: &UiStyle) -> String {
    let base = format!("{} {message}", icon(kind));
    if !style.use_color {
        return base;
    }
    match kind {
        MessageKind::Success => base.bright_cyan().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
    }
}

pub fn write_message<W: Write>(
    out: &mut W,
    kind: MessageKind,
    message: impl fmt::Display,
    style: &UiStyle,
) -> io::Result<()> {
    writeln!(out, "{}", format_message(kind, message, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_carry_icons() {
        let style = UiStyle::plain();
        assert_eq!(
            format_message(MessageKind::Success, "Created: a.md", &style),
            "✓ Created: a.md"
        );
        assert_eq!(format_message(MessageKind::Error, "boom", &style), "✖ boom");
    }
}
