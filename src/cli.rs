// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};

/// docgrep - proximity search over paged documents
///
/// Indexes a fixed catalog of paged documents and finds the tightest
/// regions of each page containing every query token, as highlighted
/// snippets with page numbers.
#[derive(Parser, Debug)]
#[command(name = "docgrep")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  docgrep index -c books/catalog.toml\n  docgrep search \"глава пятая\" -c books/catalog.toml"
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the indexed documents
    #[command(visible_alias = "s")]
    Search {
        /// Search query (free text; all tokens must match)
        query: String,

        /// Catalog file (defaults to catalog.toml)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Maximum number of documents to print
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// Snippet context radius in characters
        #[arg(short = 'C', long)]
        context: Option<usize>,
    },

    /// Build (or refresh) the persistent document index
    Index {
        /// Catalog file (defaults to catalog.toml)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Re-extract even when the cached index is still valid
        #[arg(short, long)]
        force: bool,
    },
}
