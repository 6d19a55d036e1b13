use std::io::{self, Write};

use strsim::levenshtein;

use crate::cli::ui::UiStyle;

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("up, u", "Move selection up"),
    ("down, d", "Move selection down"),
    ("1-9", "Jump to numbered item"),
    ("enter, e", "Create file with date prefix"),
    ("copy, c", "Create file without date prefix"),
    ("quit, q", "Exit program"),
    ("help, h", "Show this help"),
];

const COMMAND_WORDS: &[&str] = &["up", "down", "enter", "copy", "quit", "exit", "help"];
const EMPTY_CATALOG_WORDS: &[&str] = &["quit", "exit", "help"];

fn jump_range(len: usize) -> String {
    format!("1-{}", len.min(9))
}

/// One-line reminder printed above the typed-command prompt.
pub fn command_summary(len: usize) -> String {
    format!(
        "Commands: up/u, down/d, {}, enter/e (with date), copy/c (no date), quit/q",
        jump_range(len)
    )
}

pub fn write_help<W: Write>(out: &mut W, style: &UiStyle) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style.accent("Available commands:"))?;
    for (keys, description) in HELP_ENTRIES {
        writeln!(out, "  {} - {description}", style.bold(keys))?;
    }
    Ok(())
}

/// Closest known command word, when the typo is small enough to be likely.
pub fn suggestion(input: &str, catalog_empty: bool) -> Option<&'static str> {
    let words = if catalog_empty {
        EMPTY_CATALOG_WORDS
    } else {
        COMMAND_WORDS
    };
    let input_len = input.chars().count();
    words
        .iter()
        .map(|word| (levenshtein(word, input), *word))
        .filter(|(distance, _)| *distance <= 2 && *distance < input_len)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, word)| word)
}

/// Lines shown after unrecognised typed input.
pub fn unknown_hint(input: &str, len: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if len == 0 {
        lines.push("Unknown command. Try: quit".to_string());
    } else {
        lines.push(format!(
            "Unknown command. Try: up/down, {}, enter, copy, quit, help",
            jump_range(len)
        ));
    }
    if let Some(word) = suggestion(input, len == 0) {
        lines.push(format!("Did you mean `{word}`?"));
    }
    lines
}
