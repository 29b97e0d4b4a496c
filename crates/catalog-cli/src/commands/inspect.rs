//! Commands that print catalog contents

use std::path::Path;

use catalog_store::{Store, StoreConfig};
use serde_json::json;

use super::load_catalog;
use crate::error::{CliError, Result};

/// Run the list command
pub fn run_list(file: &Path, json: bool) -> Result<()> {
    let entries = load_catalog(file)?;
    tracing::debug!(file = %file.display(), entries = entries.len(), "listing catalog");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries.list())?);
    } else {
        for name in entries.list() {
            println!("{name}");
        }
    }

    Ok(())
}

/// Run the get command
pub fn run_get(file: &Path, name: &str, json: bool) -> Result<()> {
    let entries = load_catalog(file)?;
    let content = entries.get(name).ok_or_else(|| {
        CliError::user(format!("entry '{}' not found in {}", name, file.display()))
    })?;

    if json {
        let value = json!({ "name": name, "content": content });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{content}");
    }

    Ok(())
}

/// Run the dump command
///
/// Loads the store described by `config`, parses the catalog stored under
/// `key` and prints it back in its own dialect.
pub fn run_dump(config: &Path, key: &str, json: bool) -> Result<()> {
    let config = StoreConfig::load(config)?;
    let sources = Store::from_config(&config)?;
    tracing::debug!(sources = sources.len(), %key, "loaded catalog sources");

    let document = catalog::parse_document_from(&sources, key)?;

    if json {
        let value = json!({
            "dialect": document.dialect(),
            "entries": document.entries(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", document.render());
    }

    Ok(())
}
