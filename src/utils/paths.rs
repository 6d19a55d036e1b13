use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::{Result, TempletError};

const DOCUMENTS_DIR: &str = "Documents";
const TEMPLATE_DIR_NAME: &str = "templet";

/// Returns the template directory, defaulting to `~/Documents/templet`.
/// `TEMPLET_HOME` overrides the location.
pub fn template_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TEMPLET_HOME") {
        return PathBuf::from(custom);
    }
    default_template_dir()
}

pub fn default_template_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DOCUMENTS_DIR)
        .join(TEMPLATE_DIR_NAME)
}

/// Short, home-relative form of `path` for display.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}/", relative.display());
        }
    }
    format!("{}/", path.display())
}

/// Creates the template directory when it does not exist yet.
pub fn ensure_template_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|source| TempletError::Discovery {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(dir = %path.display(), "created template directory");
    Ok(())
}
