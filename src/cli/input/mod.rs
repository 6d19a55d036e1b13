//! Input strategies. Both turn one user input event into a [`Command`]; the
//! main loop never knows which one is active.

mod line;
mod raw;

use std::io::{self, IsTerminal};

use crossterm::terminal;

use crate::command::Command;
use crate::config::InputPreference;
use crate::session::SessionView;

pub use line::{translate_line, LineInput};
pub use raw::{translate_key, RawKeyInput};

use crate::cli::ui::test_mode;

/// Capability mode reported to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Raw,
    Line,
}

pub trait InputSource {
    fn mode(&self) -> InputMode;

    /// Blocks for one input event. `None` means the event was ignored and
    /// the frame should simply be redrawn.
    fn next_command(&mut self, view: &SessionView<'_>) -> io::Result<Option<Command>>;

    /// Waits for the user to dismiss a help screen or hint.
    fn acknowledge(&mut self) -> io::Result<()>;
}

/// True when single keypresses can be captured from this terminal.
pub fn probe_raw_mode() -> bool {
    if !io::stdin().is_terminal() {
        return false;
    }
    match terminal::enable_raw_mode() {
        Ok(()) => {
            let _ = terminal::disable_raw_mode();
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "raw mode unavailable");
            false
        }
    }
}

/// Picks the input strategy for this run. The optional message explains a
/// fallback the user may not expect.
pub fn select_input(preference: InputPreference) -> (Box<dyn InputSource>, Option<String>) {
    if test_mode::is_enabled() {
        return (Box::new(RawKeyInput::scripted()), None);
    }
    match preference {
        InputPreference::Raw => (Box::new(RawKeyInput::terminal()), None),
        InputPreference::Line => (Box::new(LineInput::stdio()), None),
        InputPreference::Auto => {
            if probe_raw_mode() {
                (Box::new(RawKeyInput::terminal()), None)
            } else if io::stdin().is_terminal() {
                tracing::info!("falling back to typed commands");
                (
                    Box::new(LineInput::stdio()),
                    Some("Raw key input unavailable, using typed commands.".to_string()),
                )
            } else {
                (Box::new(LineInput::stdio()), None)
            }
        }
    }
}
