//! Store configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Where a store's files live and which of them to load.
///
/// ```toml
/// root = "sql"
/// patterns = ["*.sql", "web/*"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory to scan. Relative roots are resolved against the config
    /// file's directory when loaded with [`StoreConfig::load`].
    pub root: PathBuf,
    /// Glob patterns matched against `/`-separated relative paths
    pub patterns: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: vec!["**/*".to_string()],
        }
    }
}

impl StoreConfig {
    pub fn new(
        root: impl Into<PathBuf>,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            root: root.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let mut config: Self = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if config.root.is_relative() {
            if let Some(parent) = path.parent() {
                config.root = parent.join(&config.root);
            }
        }

        tracing::debug!(
            path = %path.display(),
            root = %config.root.display(),
            "loaded store config"
        );
        Ok(config)
    }
}
