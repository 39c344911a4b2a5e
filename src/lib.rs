// SPDX-License-Identifier: MIT OR Apache-2.0

//! docgrep - proximity search over a fixed catalog of paged documents
//!
//! The core is a pure, synchronous pipeline: raw pages are case-folded
//! into an immutable [`indexer::DocumentIndex`]; a query is tokenized
//! (with a camel-case/underscore split pass); pages containing every
//! token are swept for the minimal windows proving it; windows become
//! de-duplicated, highlighted snippets ranked tightest-first. Document
//! extraction and the persistent index cache are collaborators behind
//! [`indexer::PageSource`] and [`indexer::IndexCache`].

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod indexer;
pub mod normalize;
pub mod output;
pub mod query;
pub mod tokenize;

pub use catalog::{Catalog, CatalogEntry};
pub use indexer::{
    build_document_index, load_or_build, DocumentIndex, FsPageSource, IndexCache, LoadedIndex,
    PageContent, PageSource,
};
pub use normalize::normalize;
pub use query::{search, search_with_options, PageMatch, SearchOptions, SearchResult};
pub use tokenize::tokenize;
