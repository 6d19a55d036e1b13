use std::io;

use crossterm::terminal;

use super::{InputMode, InputSource};
use crate::cli::ui::{navigation, test_mode, NavKey};
use crate::command::Command;
use crate::session::SessionView;

/// Maps a normalized key to a command. Unlisted keys, and template commands
/// on an empty catalog, yield `None`.
pub fn translate_key(key: NavKey, catalog_empty: bool) -> Option<Command> {
    let command = match key {
        NavKey::Char('q') | NavKey::Interrupt => Command::Quit,
        NavKey::Up => Command::MoveUp,
        NavKey::Down => Command::MoveDown,
        NavKey::Enter => Command::Instantiate {
            with_date_prefix: true,
        },
        NavKey::Char('c') => Command::Instantiate {
            with_date_prefix: false,
        },
        _ => return None,
    };
    if catalog_empty && command.needs_templates() {
        return None;
    }
    Some(command)
}

enum KeySource {
    Terminal,
    Scripted,
}

/// Single-keypress strategy backed by crossterm raw mode.
pub struct RawKeyInput {
    source: KeySource,
}

impl RawKeyInput {
    pub fn terminal() -> Self {
        Self {
            source: KeySource::Terminal,
        }
    }

    /// Reads keys from the scripted test queue; an exhausted queue quits.
    pub fn scripted() -> Self {
        Self {
            source: KeySource::Scripted,
        }
    }

    fn read_key(&self) -> io::Result<NavKey> {
        match self.source {
            KeySource::Scripted => Ok(test_mode::next_key().unwrap_or(NavKey::Interrupt)),
            KeySource::Terminal => {
                let _guard = RawModeGuard::activate()?;
                navigation::read_nav_key()
            }
        }
    }
}

impl InputSource for RawKeyInput {
    fn mode(&self) -> InputMode {
        InputMode::Raw
    }

    fn next_command(&mut self, view: &SessionView<'_>) -> io::Result<Option<Command>> {
        let key = self.read_key()?;
        tracing::debug!(?key, "key received");
        Ok(translate_key(key, view.is_empty()))
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Keeps raw mode on for exactly one read; restored on drop.
struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}
