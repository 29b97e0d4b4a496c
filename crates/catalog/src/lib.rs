//! Named text fragments embedded in comment-tagged catalog files
//!
//! A catalog keeps several named snippets in one file, delimited by comment
//! lines in the file's own syntax so other tools can still read it:
//!
//! ```text
//! -- start: select_all_users
//! SELECT * FROM users
//! -- end: select_all_users
//! ```
//!
//! Parsing yields a [`Store`] from entry name to body text. Bodies are opaque
//! and never interpreted.

pub mod dialect;
pub mod error;
pub mod must;
pub mod parser;

pub use catalog_store::Store;
pub use dialect::{Dialect, TagMatchers};
pub use error::{Error, Result};
pub use must::{must_parse, must_parse_file, must_parse_str};
pub use parser::{Catalog, parse, parse_document, parse_document_from, parse_file, parse_str};
