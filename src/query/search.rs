// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search orchestrator: token containment gates, proximity windows,
//! snippet assembly and per-page dedup, in document order.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::indexer::cache::IndexCache;
use crate::indexer::extract::FsPageSource;
use crate::indexer::index::{load_or_build, DocumentIndex, PageContent};
use crate::output::{print_json, render_snippet, use_colors};
use crate::query::snippet::{build_snippet, CONTEXT_RADIUS};
use crate::query::window::find_windows;
use crate::tokenize::tokenize;

/// Accepted matches per page; remaining (wider) windows are ignored.
pub const MAX_MATCHES_PER_PAGE: usize = 3;

/// One highlighted excerpt on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMatch {
    pub page_number: u32,
    pub snippet: String,
    /// Byte offset of the highlight within `snippet`.
    pub match_index: usize,
    /// Byte length of the highlight; never reaches past the snippet.
    pub highlight_length: usize,
}

/// All matches for one document, in page order, tightest window first
/// within a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_id: String,
    pub title: String,
    pub path: String,
    pub matches: Vec<PageMatch>,
}

/// Knobs threaded from the CLI/config layer into the pure core.
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub context_radius: usize,
    pub max_matches_per_page: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            context_radius: CONTEXT_RADIUS,
            max_matches_per_page: MAX_MATCHES_PER_PAGE,
        }
    }
}

/// Searches `documents` for the tightest regions containing every token
/// of `query`, with default snippet options.
///
/// Empty or whitespace-only queries perform no search and return an
/// empty result, as do queries that tokenize to nothing (pure
/// punctuation). Output order follows the input document order.
pub fn search(documents: &[DocumentIndex], query: &str) -> Vec<SearchResult> {
    search_with_options(documents, query, &SearchOptions::default())
}

/// [`search`] with explicit snippet options.
pub fn search_with_options(
    documents: &[DocumentIndex],
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let tokens = tokenize(trimmed);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = Vec::new();

    for document in documents {
        // Cheap document-level rejection before any page is scanned.
        if !tokens
            .iter()
            .all(|token| document.aggregated_normalized_text.contains(token.as_str()))
        {
            continue;
        }

        let mut matches: Vec<PageMatch> = Vec::new();
        for page in &document.pages {
            if !tokens
                .iter()
                .all(|token| page.normalized_text.contains(token.as_str()))
            {
                continue;
            }
            matches.extend(page_matches(page, &tokens, options));
        }

        if !matches.is_empty() {
            results.push(SearchResult {
                document_id: document.id.clone(),
                title: document.title.clone(),
                path: document.path.clone(),
                matches,
            });
        }
    }

    results
}

/// Builds up to `max_matches_per_page` snippets for one qualifying page,
/// tightest window first, skipping snippets whose exact text was already
/// accepted (two windows can render the same visible excerpt).
fn page_matches(
    page: &PageContent,
    tokens: &[String],
    options: &SearchOptions,
) -> Vec<PageMatch> {
    let windows = find_windows(&page.normalized_text, tokens);
    let mut seen_snippets: HashSet<String> = HashSet::new();
    let mut matches: Vec<PageMatch> = Vec::new();

    for window in windows {
        let built = build_snippet(&page.text, window.start, window.end, options.context_radius);
        if !seen_snippets.insert(built.snippet.clone()) {
            continue;
        }

        matches.push(PageMatch {
            page_number: page.page_number,
            snippet: built.snippet,
            match_index: built.match_index,
            highlight_length: built.highlight_length,
        });

        if matches.len() >= options.max_matches_per_page {
            break;
        }
    }

    matches
}

/// CLI entry point for `docgrep search`.
pub fn run(
    query: &str,
    catalog: Option<&str>,
    max_results: Option<usize>,
    context: Option<usize>,
    format: Option<OutputFormat>,
    compact: bool,
) -> Result<()> {
    let start_time = Instant::now();

    if query.trim().is_empty() {
        anyhow::bail!("Search query cannot be empty");
    }

    let config = Config::load();
    let catalog_path = config.merge_catalog_path(catalog);
    let catalog = Catalog::load(&catalog_path)?;
    let root = crate::catalog::root_dir(&catalog_path);

    let source = FsPageSource::new(&root);
    let cache = IndexCache::new(&root);
    let documents = load_or_build(&catalog, &source, &cache, false).documents;

    let options = SearchOptions {
        context_radius: config.merge_context_radius(context),
        ..SearchOptions::default()
    };
    let mut results = search_with_options(&documents, query, &options);
    results.truncate(config.merge_max_results(max_results));

    let format = format
        .or_else(|| config.output_format())
        .unwrap_or(OutputFormat::Text);
    match format {
        OutputFormat::Json => print_json(&results, compact)?,
        OutputFormat::Text => print_text_results(&results, query, start_time),
    }

    Ok(())
}

fn print_text_results(results: &[SearchResult], query: &str, start_time: Instant) {
    let use_color = use_colors();

    if results.is_empty() {
        println!("No results found for '{query}'");
        return;
    }

    for result in results {
        println!("{} ({})", result.title, result.path);
        for page_match in &result.matches {
            let rendered = render_snippet(
                &page_match.snippet,
                page_match.match_index,
                page_match.highlight_length,
                use_color,
            );
            println!("  p.{}: {}", page_match.page_number, rendered);
        }
        println!();
    }

    let total: usize = results.iter().map(|result| result.matches.len()).sum();
    println!(
        "{} match(es) in {} document(s) [{} ms]",
        total,
        results.len(),
        start_time.elapsed().as_millis()
    );
}
