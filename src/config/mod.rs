use std::{env, path::PathBuf};

use crate::errors::{Result, TempletError};
use crate::utils::paths;

/// Forces an input strategy instead of probing the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPreference {
    #[default]
    Auto,
    Raw,
    Line,
}

impl InputPreference {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Some(Self::Auto),
            "raw" | "fancy" => Some(Self::Raw),
            "line" | "plain" => Some(Self::Line),
            _ => None,
        }
    }
}

/// Runtime settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub template_dir: PathBuf,
    pub work_dir: PathBuf,
    pub input: InputPreference,
    pub color: bool,
}

impl Settings {
    pub fn new(template_dir: PathBuf, work_dir: PathBuf) -> Self {
        Self {
            template_dir,
            work_dir,
            input: InputPreference::Auto,
            color: true,
        }
    }

    /// Reads `TEMPLET_HOME`, `TEMPLET_INPUT` and `NO_COLOR`.
    pub fn from_env() -> Result<Self> {
        let work_dir = env::current_dir().map_err(TempletError::WorkingDir)?;
        let mut settings = Self::new(paths::template_dir(), work_dir);
        if let Ok(raw) = env::var("TEMPLET_INPUT") {
            match InputPreference::parse(&raw) {
                Some(pref) => settings.input = pref,
                None => tracing::warn!(value = %raw, "ignoring unknown TEMPLET_INPUT value"),
            }
        }
        settings.color = env::var_os("NO_COLOR").is_none();
        Ok(settings)
    }
}
