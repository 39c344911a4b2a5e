// SPDX-License-Identifier: MIT OR Apache-2.0

//! docgrep - proximity search over paged documents
//!
//! Tokenizes a free-text query, finds the tightest page regions holding
//! every token, and prints highlighted snippets with page numbers.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docgrep::cli::{Cli, Commands};
use docgrep::{indexer, query};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let compact = cli.compact;

    match cli.command {
        Commands::Search { query, catalog, max_results, context } => {
            query::search::run(
                &query,
                catalog.as_deref(),
                max_results,
                context,
                format,
                compact,
            )?;
        }
        Commands::Index { catalog, force } => {
            indexer::index::run(catalog.as_deref(), force, format, compact)?;
        }
    }

    Ok(())
}
