//! Error taxonomy shared by the registry builder and the level searcher.
//!
//! Every variant is fatal: both tools stop at the first error and report it.

use std::path::PathBuf;

/// Errors raised while scanning, parsing or writing level data
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing key '{key}' in {}", path.display())]
    MissingKey { path: PathBuf, key: String },

    #[error("Key '{key}' in {} is not {expected}", path.display())]
    WrongType {
        path: PathBuf,
        key: String,
        expected: &'static str,
    },

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl LevelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LevelError::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, LevelError>;
