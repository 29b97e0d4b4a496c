//! Error types for catalog parsing

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a catalog
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown comment marker `{prefix}`, expected one of `--`, `##`, `//` or `/*`")]
    UnknownDialect { prefix: String },

    #[error("Invalid start tag at line {line}")]
    InvalidStartTag { line: usize },

    #[error("Invalid end tag at line {line}")]
    InvalidEndTag { line: usize },

    #[error("End tag `{got}` does not close `{expected}` at line {line}")]
    NameMismatch {
        line: usize,
        got: String,
        expected: String,
    },

    #[error("Unexpected end of catalog: entry `{name}` is never closed")]
    UnexpectedEnd { name: String },

    #[error("Missing catalog source {key}")]
    MissingSource { key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to build tag matcher: {0}")]
    Regex(#[from] regex::Error),
}
