// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexer module - page extraction, index building, persistent cache

pub mod cache;
pub mod extract;
pub mod index;

pub use cache::IndexCache;
pub use extract::{FsPageSource, PageIter, PageSource};
pub use index::{build_document_index, load_or_build, DocumentIndex, LoadedIndex, PageContent};
