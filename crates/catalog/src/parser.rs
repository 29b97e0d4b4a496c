//! Line-oriented catalog extraction
//!
//! The extractor walks the document one line at a time with two states:
//! outside any entry, where blank lines are skipped and everything else must
//! be a start tag, and inside an entry, where lines are collected until the
//! matching end tag.

use std::fs;
use std::path::Path;

use catalog_store::Store;

use crate::dialect::{Dialect, TagMatchers};
use crate::error::{Error, Result};

/// A parsed catalog together with the dialect it was written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    dialect: Option<Dialect>,
    entries: Store,
}

impl Catalog {
    /// The detected dialect, `None` for a document with no tagged lines.
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    pub fn entries(&self) -> &Store {
        &self.entries
    }

    pub fn into_entries(self) -> Store {
        self.entries
    }

    /// Render the entries back into catalog form using the same dialect.
    pub fn render(&self) -> String {
        let Some(dialect) = self.dialect else {
            return String::new();
        };

        let mut out = String::new();
        for (name, content) in &self.entries {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&dialect.format_start(name));
            out.push('\n');
            if !content.is_empty() {
                out.push_str(content);
                out.push('\n');
            }
            out.push_str(&dialect.format_end(name));
            out.push('\n');
        }
        out
    }
}

/// Parse a catalog and keep track of its dialect.
pub fn parse_document(source: &str) -> Result<Catalog> {
    // The first non-blank line is always the first start tag the extractor
    // sees, so the dialect is resolved from it exactly once.
    let Some(first) = source.split('\n').find(|line| !is_blank(line)) else {
        return Ok(Catalog {
            dialect: None,
            entries: Store::new(),
        });
    };

    let tags = TagMatchers::resolve(first)?;
    tracing::debug!(dialect = ?tags.dialect(), "resolved catalog dialect");

    let mut extractor = Extractor::new(&tags);
    for (index, line) in source.split('\n').enumerate() {
        extractor.feed(index + 1, line)?;
    }

    Ok(Catalog {
        dialect: Some(tags.dialect()),
        entries: extractor.finish()?,
    })
}

/// Parse a catalog held in memory.
pub fn parse_str(source: &str) -> Result<Store> {
    parse_document(source).map(Catalog::into_entries)
}

/// Parse the catalog stored under `key` in `store`.
pub fn parse(store: &Store, key: &str) -> Result<Store> {
    parse_document_from(store, key).map(Catalog::into_entries)
}

/// Like [`parse`], but keeps the detected dialect.
pub fn parse_document_from(store: &Store, key: &str) -> Result<Catalog> {
    let source = store.get(key).ok_or_else(|| Error::MissingSource {
        key: key.to_string(),
    })?;
    parse_document(source)
}

/// Read a catalog file and parse it.
///
/// I/O failures are returned unchanged as [`Error::Io`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Store> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read catalog file");
    parse_str(&source)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

enum State {
    Outside,
    Inside { name: String, content: String },
}

struct Extractor<'t> {
    tags: &'t TagMatchers,
    state: State,
    entries: Store,
}

impl<'t> Extractor<'t> {
    fn new(tags: &'t TagMatchers) -> Self {
        Self {
            tags,
            state: State::Outside,
            entries: Store::new(),
        }
    }

    fn feed(&mut self, line_number: usize, line: &str) -> Result<()> {
        match &mut self.state {
            State::Outside => {
                if is_blank(line) {
                    return Ok(());
                }

                let name = self
                    .tags
                    .start_name(line)
                    .filter(|name| !name.is_empty())
                    .ok_or(Error::InvalidStartTag { line: line_number })?;

                self.state = State::Inside {
                    name: name.to_string(),
                    content: String::new(),
                };
            }
            State::Inside { name, content } => match self.tags.end_name(line) {
                None => {
                    // No leading newline: blank lines before the first body
                    // line are dropped, later ones are kept.
                    if !content.is_empty() {
                        content.push('\n');
                    }
                    content.push_str(line);
                }
                Some("") => return Err(Error::InvalidEndTag { line: line_number }),
                Some(got) if got != name.as_str() => {
                    return Err(Error::NameMismatch {
                        line: line_number,
                        got: got.to_string(),
                        expected: name.clone(),
                    });
                }
                Some(_) => {
                    let name = std::mem::take(name);
                    let content = std::mem::take(content);
                    self.state = State::Outside;
                    self.commit(name, content);
                }
            },
        }

        Ok(())
    }

    fn commit(&mut self, name: String, content: String) {
        if self.entries.contains(&name) {
            tracing::debug!(%name, "catalog entry overwrites an earlier one");
        }
        tracing::trace!(%name, bytes = content.len(), "committed catalog entry");
        self.entries.insert(name, content);
    }

    fn finish(self) -> Result<Store> {
        match self.state {
            State::Outside => Ok(self.entries),
            State::Inside { name, .. } => Err(Error::UnexpectedEnd { name }),
        }
    }
}
