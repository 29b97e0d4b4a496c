//! Catalog CLI
//!
//! Lists, prints and checks the named entries of comment-tagged catalogs.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to initialise logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} comment-tagged catalog tool", "catalog".green().bold());
            println!();
            println!("Run {} for available commands.", "catalog --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { file, json } => commands::run_list(&file, json),
        Commands::Get { file, name, json } => commands::run_get(&file, &name, json),
        Commands::Check { files } => commands::run_check(&files),
        Commands::Dump { config, key, json } => commands::run_dump(&config, &key, json),
    }
}
