//! Check command implementation

use std::path::PathBuf;

use colored::Colorize;

use super::load_catalog;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Every file is checked even after a failure; the command fails if any of
/// them did.
pub fn run_check(files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for file in files {
        match load_catalog(file) {
            Ok(entries) => println!(
                "{} {} ({} entries)",
                "ok".green().bold(),
                file.display(),
                entries.len()
            ),
            Err(e) => {
                failed += 1;
                println!("{} {}", "error".red().bold(), e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::user(format!(
            "{} of {} catalogs failed to parse",
            failed,
            files.len()
        )));
    }

    Ok(())
}
