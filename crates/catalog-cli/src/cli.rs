//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Catalog - inspect files of named, comment-tagged snippets
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the entry names defined in a catalog file
    List {
        /// Catalog file to parse
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the content of one entry
    ///
    /// Examples:
    ///   catalog get queries.sql select_all_users
    ///   catalog get queries.sql select_all_users --json
    Get {
        /// Catalog file to parse
        file: PathBuf,

        /// Entry name
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check that catalog files are well-formed
    Check {
        /// Catalog files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Parse a catalog from a configured store and print it back
    ///
    /// The store config is a TOML file with `root` and `patterns`.
    Dump {
        /// Store config file
        #[arg(short, long, env = "CATALOG_CONFIG")]
        config: PathBuf,

        /// Key of the catalog source within the store
        key: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
