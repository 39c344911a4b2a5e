// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory document index built from raw page text.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogEntry};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::errors::DocumentUnreadable;
use crate::indexer::cache::IndexCache;
use crate::indexer::extract::{FsPageSource, PageSource};
use crate::normalize::normalize;
use crate::output::print_json;

/// Separator between page texts in the aggregated document text. Tokens
/// never contain whitespace, so it can never complete a match by itself.
const PAGE_SEPARATOR: &str = "\n";

/// One page of a document, original and case-folded text side by side.
///
/// `normalized_text` has the same byte length as `text`, so offsets found
/// in one slice the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub page_number: u32,
    pub text: String,
    pub normalized_text: String,
}

impl PageContent {
    pub fn new(page_number: u32, text: String) -> Self {
        let normalized_text = normalize(&text);
        debug_assert_eq!(normalized_text.len(), text.len());
        Self {
            page_number,
            text,
            normalized_text,
        }
    }
}

/// A fully indexed document: page texts plus the aggregated normalized
/// text used to reject non-matching documents without touching pages.
///
/// Built once per catalog entry and immutable afterwards; concurrent
/// searches can share it freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentIndex {
    pub id: String,
    pub title: String,
    pub path: String,
    pub pages: Vec<PageContent>,
    pub aggregated_normalized_text: String,
}

/// Extracts and indexes one catalog entry.
///
/// A page-level extraction failure keeps the pages gathered so far and
/// stops there; only an open failure drops the document entirely.
pub fn build_document_index(
    source: &dyn PageSource,
    entry: &CatalogEntry,
) -> Result<DocumentIndex, DocumentUnreadable> {
    let page_iter = source.open(&entry.path)?;

    let mut pages: Vec<PageContent> = Vec::new();
    for page in page_iter {
        match page {
            Ok((page_number, text)) => pages.push(PageContent::new(page_number, text)),
            Err(err) => {
                warn!(document = %entry.id, %err, kept_pages = pages.len(),
                    "page extraction failed, keeping earlier pages");
                break;
            }
        }
    }

    let aggregated_normalized_text = pages
        .iter()
        .map(|page| page.normalized_text.as_str())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR);

    debug!(document = %entry.id, pages = pages.len(), "indexed document");

    Ok(DocumentIndex {
        id: entry.id.clone(),
        title: entry.title.clone(),
        path: entry.path.clone(),
        pages,
        aggregated_normalized_text,
    })
}

/// Document indexes plus where they came from.
#[derive(Debug)]
pub struct LoadedIndex {
    pub documents: Vec<DocumentIndex>,
    pub from_cache: bool,
}

/// Returns the indexes for `catalog`, from the cache when its signature
/// still matches, otherwise by extracting every document.
///
/// Unreadable documents are skipped with a warning; cache failures are
/// never fatal (a failed read counts as a miss, a failed write is logged
/// and ignored).
pub fn load_or_build(
    catalog: &Catalog,
    source: &dyn PageSource,
    cache: &IndexCache,
    force: bool,
) -> LoadedIndex {
    let signature = catalog.signature();

    if !force {
        if let Some(documents) = cache.load(&signature) {
            debug!(documents = documents.len(), "index cache hit");
            return LoadedIndex {
                documents,
                from_cache: true,
            };
        }
    }

    let documents = build_catalog(catalog, source);

    if let Err(err) = cache.store(&signature, &documents) {
        warn!(%err, "failed to persist index cache");
    }

    LoadedIndex {
        documents,
        from_cache: false,
    }
}

/// Indexes every readable document of `catalog`, in catalog order.
pub fn build_catalog(catalog: &Catalog, source: &dyn PageSource) -> Vec<DocumentIndex> {
    let mut documents: Vec<DocumentIndex> = Vec::new();
    for entry in &catalog.documents {
        match build_document_index(source, entry) {
            Ok(index) => documents.push(index),
            Err(err) => warn!(document = %entry.id, %err, "skipping unreadable document"),
        }
    }
    documents
}

/// CLI entry point for `docgrep index`.
pub fn run(
    catalog: Option<&str>,
    force: bool,
    format: Option<OutputFormat>,
    compact: bool,
) -> Result<()> {
    let config = Config::load();
    let catalog_path = config.merge_catalog_path(catalog);
    let catalog = Catalog::load(&catalog_path)?;
    let root = crate::catalog::root_dir(&catalog_path);

    let source = FsPageSource::new(&root);
    let cache = IndexCache::new(&root);
    let loaded = load_or_build(&catalog, &source, &cache, force);

    let summary = IndexSummary {
        documents: loaded.documents.len(),
        pages: loaded
            .documents
            .iter()
            .map(|document| document.pages.len())
            .sum(),
        skipped: catalog.documents.len() - loaded.documents.len(),
        from_cache: loaded.from_cache,
        cache_path: cache.file_path().display().to_string(),
    };

    let format = format
        .or_else(|| config.output_format())
        .unwrap_or(OutputFormat::Text);
    match format {
        OutputFormat::Json => print_json(&summary, compact)?,
        OutputFormat::Text => {
            println!(
                "Indexed {} document(s), {} page(s){}{}",
                summary.documents,
                summary.pages,
                if summary.skipped > 0 {
                    format!(", {} skipped", summary.skipped)
                } else {
                    String::new()
                },
                if summary.from_cache { " (from cache)" } else { "" }
            );
            println!("Cache: {}", summary.cache_path);
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct IndexSummary {
    documents: usize,
    pages: usize,
    skipped: usize,
    from_cache: bool,
    cache_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PageExtractError;
    use crate::indexer::extract::PageIter;

    fn entry(id: &str, path: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: id.to_uppercase(),
            path: path.to_string(),
        }
    }

    /// Yields two good pages, then fails on the third.
    struct FlakySource;

    impl PageSource for FlakySource {
        fn open(&self, locator: &str) -> Result<PageIter<'_>, DocumentUnreadable> {
            if locator == "broken" {
                return Err(DocumentUnreadable::new(locator, "no such document"));
            }
            let locator = locator.to_string();
            let pages = vec![
                Ok((1, "First Page".to_string())),
                Ok((2, "Second Page".to_string())),
                Err(PageExtractError {
                    locator,
                    page_number: 3,
                    reason: "damaged page".to_string(),
                }),
            ];
            Ok(Box::new(pages.into_iter()))
        }
    }

    #[test]
    fn keeps_pages_extracted_before_a_failure() {
        let index = build_document_index(&FlakySource, &entry("doc", "ok")).expect("index");
        assert_eq!(index.pages.len(), 2);
        assert_eq!(index.pages[1].page_number, 2);
        assert_eq!(index.aggregated_normalized_text, "first page\nsecond page");
    }

    #[test]
    fn pages_are_normalized_but_originals_kept() {
        let index = build_document_index(&FlakySource, &entry("doc", "ok")).expect("index");
        assert_eq!(index.pages[0].text, "First Page");
        assert_eq!(index.pages[0].normalized_text, "first page");
    }

    #[test]
    fn open_failure_is_document_unreadable() {
        let err = build_document_index(&FlakySource, &entry("doc", "broken"))
            .expect_err("must fail");
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn load_or_build_skips_unreadable_documents() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let catalog = Catalog {
            documents: vec![entry("good", "ok"), entry("bad", "broken")],
        };
        let cache = IndexCache::new(dir.path());
        let loaded = load_or_build(&catalog, &FlakySource, &cache, false);
        assert_eq!(loaded.documents.len(), 1);
        assert_eq!(loaded.documents[0].id, "good");
    }

    #[test]
    fn load_or_build_reports_cache_provenance() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let catalog = Catalog {
            documents: vec![entry("doc", "ok")],
        };
        let cache = IndexCache::new(dir.path());

        let first = load_or_build(&catalog, &FlakySource, &cache, false);
        assert!(!first.from_cache);

        let second = load_or_build(&catalog, &FlakySource, &cache, false);
        assert!(second.from_cache);
        assert_eq!(second.documents, first.documents);

        let forced = load_or_build(&catalog, &FlakySource, &cache, true);
        assert!(!forced.from_cache);
    }
}
