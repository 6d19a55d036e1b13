//! Scripted key input for driving the raw-key strategy without a terminal.
//!
//! Setting `TEMPLET_TEST_KEYS` to a comma separated list such as
//! `DOWN,DOWN,ENTER` replaces terminal capture with that queue.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

use crate::cli::ui::navigation::NavKey;

pub const TEST_KEYS_VAR: &str = "TEMPLET_TEST_KEYS";

struct KeyQueue {
    enabled: bool,
    keys: VecDeque<NavKey>,
}

impl KeyQueue {
    fn from_env() -> Self {
        match env::var(TEST_KEYS_VAR) {
            Ok(raw) => Self {
                enabled: true,
                keys: parse_key_sequence(&raw),
            },
            Err(_) => Self {
                enabled: false,
                keys: VecDeque::new(),
            },
        }
    }
}

static KEYS: Lazy<Mutex<KeyQueue>> = Lazy::new(|| Mutex::new(KeyQueue::from_env()));

pub fn is_enabled() -> bool {
    KEYS.lock().map(|guard| guard.enabled).unwrap_or(false)
}

/// Next scripted key, or `None` once the queue is exhausted.
pub fn next_key() -> Option<NavKey> {
    KEYS.lock().ok()?.keys.pop_front()
}

pub fn install_keys(keys: Vec<NavKey>) {
    if let Ok(mut guard) = KEYS.lock() {
        guard.enabled = true;
        guard.keys = keys.into();
    }
}

pub fn reset_keys() {
    if let Ok(mut guard) = KEYS.lock() {
        guard.enabled = false;
        guard.keys.clear();
    }
}

pub fn parse_key_sequence(raw: &str) -> VecDeque<NavKey> {
    raw.split(',')
        .filter_map(|token| parse_key(token.trim()))
        .collect()
}

fn parse_key(token: &str) -> Option<NavKey> {
    if token.is_empty() {
        return None;
    }
    match token.to_ascii_uppercase().as_str() {
        "UP" => Some(NavKey::Up),
        "DOWN" => Some(NavKey::Down),
        "LEFT" => Some(NavKey::Left),
        "RIGHT" => Some(NavKey::Right),
        "ENTER" | "RETURN" => Some(NavKey::Enter),
        "ESC" | "ESCAPE" => Some(NavKey::Esc),
        "CTRL-C" | "^C" => Some(NavKey::Interrupt),
        _ if token.chars().count() == 1 => token.chars().next().map(NavKey::Char),
        _ => None,
    }
}
