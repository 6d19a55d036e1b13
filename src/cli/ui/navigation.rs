use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Normalized key produced by raw terminal capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Char(char),
    /// Ctrl-C while waiting for a key.
    Interrupt,
    Unknown,
}

impl NavKey {
    pub fn from_event(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                {
                    return NavKey::Interrupt;
                }
                match key.code {
                    KeyCode::Up => NavKey::Up,
                    KeyCode::Down => NavKey::Down,
                    KeyCode::Left => NavKey::Left,
                    KeyCode::Right => NavKey::Right,
                    KeyCode::Enter => NavKey::Enter,
                    KeyCode::Esc => NavKey::Esc,
                    KeyCode::Char(c) => NavKey::Char(c),
                    _ => NavKey::Unknown,
                }
            }
            _ => NavKey::Unknown,
        }
    }
}

/// Blocks for the next terminal event. Raw mode must already be active.
pub fn read_nav_key() -> io::Result<NavKey> {
    event::read().map(NavKey::from_event)
}
