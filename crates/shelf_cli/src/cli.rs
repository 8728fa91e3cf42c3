//! Command-line surface of the `shelf` binary.
//!
//! # Responsibility
//! - Declare global flags and subcommands.
//! - Parse genre and search-field values through their core `FromStr` impls.

use clap::{Parser, Subcommand};
use shelf_core::{Genre, SearchField, DATA_PATH_ENV, DEFAULT_DATA_FILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", version, about = "Personal book catalog")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = DATA_PATH_ENV,
        default_value = DEFAULT_DATA_FILE,
        help = "Catalog JSON file"
    )]
    pub data: PathBuf,
    #[arg(long, global = true, help = "Absolute directory for rolling log files")]
    pub log_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Log level (trace|debug|info|warn|error)")]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every book with its index.
    List,
    /// Append a book to the catalog.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        year: i32,
        #[arg(long, default_value = "Other")]
        genre: Genre,
        #[arg(long, default_value_t = false)]
        read: bool,
    },
    /// Remove the book at an index. Unknown indices are ignored.
    Remove { index: usize },
    /// Flip read status of the book at an index.
    Toggle { index: usize },
    /// Case-insensitive substring search over one field.
    Search {
        term: String,
        #[arg(long, default_value = "title")]
        by: SearchField,
    },
    /// Show totals and per-genre/decade breakdowns.
    Stats,
    /// List accepted genre names.
    Genres,
}

impl Commands {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List => "list",
            Commands::Add { .. } => "add",
            Commands::Remove { .. } => "remove",
            Commands::Toggle { .. } => "toggle",
            Commands::Search { .. } => "search",
            Commands::Stats => "stats",
            Commands::Genres => "genres",
        }
    }
}
