//! Error types for catalog-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A catalog file failed to read or parse
    #[error("{}: {source}", .path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: catalog::Error,
    },

    /// Error from catalog parsing without a file of its own
    #[error(transparent)]
    Parse(#[from] catalog::Error),

    /// Error from catalog-store
    #[error(transparent)]
    Store(#[from] catalog_store::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Attach the catalog file path to a parse error
    pub fn catalog(path: impl Into<PathBuf>, source: catalog::Error) -> Self {
        Self::Catalog {
            path: path.into(),
            source,
        }
    }

    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
