//! Populate a store from files on disk

use std::fs;
use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::key::key_from_relative;
use crate::{Error, Result, Store, StoreConfig};

/// Compile a single glob with `*` confined to one path segment.
pub(crate) fn compile_glob(pattern: &str) -> Result<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn compile_globs<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern.as_ref())?);
    }

    builder.build().map_err(|source| Error::Pattern {
        pattern: patterns
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(", "),
        source,
    })
}

impl Store {
    /// Load every file under `root` whose relative path matches one of
    /// `patterns`.
    ///
    /// Patterns are validated before the filesystem is touched. Keys are the
    /// `/`-separated paths relative to `root`, and file contents must be
    /// UTF-8. Symlinked files are read; symlinked directories are skipped.
    pub fn load<S: AsRef<str>>(root: impl AsRef<Path>, patterns: &[S]) -> Result<Self> {
        let root = root.as_ref();
        let globs = compile_globs(patterns)?;

        let mut store = Store::new();
        collect(root, &globs, &mut store)?;
        tracing::debug!(root = %root.display(), entries = store.len(), "loaded store");
        Ok(store)
    }

    /// Load the store described by `config`.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::load(&config.root, &config.patterns)
    }
}

fn collect(root: &Path, globs: &GlobSet, store: &mut Store) -> Result<()> {
    // Walk errors for the root itself do not name it, so check it up front.
    fs::read_dir(root).map_err(|e| Error::io(root, e))?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        let is_file = match entry.file_type() {
            Some(file_type) if file_type.is_symlink() => path.is_file(),
            Some(file_type) => file_type.is_file(),
            None => false,
        };
        if !is_file {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let key = key_from_relative(relative).ok_or_else(|| Error::NonUtf8 {
            path: path.to_path_buf(),
        })?;
        if !globs.is_match(&key) {
            continue;
        }

        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let content = String::from_utf8(bytes).map_err(|_| Error::NonUtf8 {
            path: path.to_path_buf(),
        })?;

        tracing::debug!(%key, bytes = content.len(), "loaded store entry");
        store.insert(key, content);
    }

    Ok(())
}
