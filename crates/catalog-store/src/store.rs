//! The name-to-text lookup store

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::key::strip_dir_prefix;
use crate::load::compile_glob;
use crate::{Error, Result};

/// An immutable-by-convention mapping from names to text.
///
/// Used both for raw source files loaded from disk (keyed by relative path)
/// and for the entries extracted from a catalog (keyed by entry name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Store {
    entries: BTreeMap<String, String>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing name-to-text mapping
    pub fn from_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up an entry by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Like [`Store::get`], but panics if the entry does not exist.
    pub fn must(&self, key: &str) -> &str {
        match self.get(key) {
            Some(content) => content,
            None => panic!("missing entry {key}"),
        }
    }

    /// Check that every key is present.
    ///
    /// The error lists all absent keys, not just the first one.
    pub fn has<I, S>(&self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = keys
            .into_iter()
            .filter(|key| !self.contains(key.as_ref()))
            .map(|key| key.as_ref().to_string())
            .collect();

        if names.is_empty() {
            Ok(())
        } else {
            Err(Error::Missing { names })
        }
    }

    /// Like [`Store::has`], but panics if any key is absent.
    pub fn must_have<I, S>(&self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Err(e) = self.has(keys) {
            panic!("{e}");
        }
    }

    /// A view of the entries under `prefix/`, keyed by the remainder.
    pub fn sub(&self, prefix: &str) -> Store {
        Self {
            entries: self
                .entries
                .iter()
                .filter_map(|(key, value)| {
                    strip_dir_prefix(key, prefix).map(|rest| (rest.to_string(), value.clone()))
                })
                .collect(),
        }
    }

    /// All entry names in sorted order.
    pub fn list(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Call `f` with every entry whose name matches the glob `pattern`.
    ///
    /// `*` stops at `/`; use `**` to cross directories.
    pub fn walk<F>(&self, pattern: &str, mut f: F) -> Result<()>
    where
        F: FnMut(&str, &str),
    {
        let matcher = compile_glob(pattern)?.compile_matcher();
        for (key, value) in &self.entries {
            if matcher.is_match(key) {
                f(key, value);
            }
        }
        Ok(())
    }

    /// The underlying mapping.
    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over `(name, content)` pairs in name order
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, String)> for Store {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
