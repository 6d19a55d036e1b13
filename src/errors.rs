use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures surfaced by template discovery and instantiation.
#[derive(Debug, Error)]
pub enum TempletError {
    #[error("cannot use template directory {}: {source}", path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read template `{template}`: {source}")]
    Read {
        template: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] io::Error),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TempletError>;
