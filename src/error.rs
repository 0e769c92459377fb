use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file handed in for checking does not exist.
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    /// A dictionary or translation source is missing at load time.
    #[error("{kind} file '{}' not found.", .path.display())]
    MissingSource { kind: &'static str, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, SpellError>;
