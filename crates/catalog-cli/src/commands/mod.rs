//! Command implementations for catalog-cli

pub mod check;
pub mod inspect;

pub use check::run_check;
pub use inspect::{run_dump, run_get, run_list};

use std::path::Path;

use catalog::Store;

use crate::error::{CliError, Result};

/// Read and parse a catalog file, tagging errors with its path.
pub(crate) fn load_catalog(file: &Path) -> Result<Store> {
    catalog::parse_file(file).map_err(|e| CliError::catalog(file, e))
}
