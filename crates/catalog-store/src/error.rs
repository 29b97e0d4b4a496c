//! Error types for catalog-store

use std::path::PathBuf;

/// Result type for catalog-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a store
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk store directory: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Missing {}", .names.join(", "))]
    Missing { names: Vec<String> },

    #[error("Failed to parse store config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Not valid UTF-8: {path}")]
    NonUtf8 { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
