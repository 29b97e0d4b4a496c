//! Panicking variants of the parse functions
//!
//! For callers that load catalogs once at startup and treat a malformed or
//! missing catalog as fatal.

use std::path::Path;

use catalog_store::Store;

use crate::parser::{parse, parse_file, parse_str};

/// Like [`parse`], but panics on error.
pub fn must_parse(store: &Store, key: &str) -> Store {
    parse(store, key).unwrap_or_else(|e| panic!("{e}"))
}

/// Like [`parse_str`], but panics on error.
pub fn must_parse_str(source: &str) -> Store {
    parse_str(source).unwrap_or_else(|e| panic!("{e}"))
}

/// Like [`parse_file`], but panics on error.
pub fn must_parse_file(path: impl AsRef<Path>) -> Store {
    let path = path.as_ref();
    parse_file(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}
