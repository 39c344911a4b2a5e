// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the indexing boundary.
//!
//! Pure text operations (normalize, tokenize, window finding, snippet
//! building) are total and have no error path; only the collaborators
//! that touch the outside world can fail.

use thiserror::Error;

/// A document locator could not be opened or parsed at all.
///
/// The indexer drops the document and keeps going; a document that never
/// indexed simply never matches.
#[derive(Debug, Error)]
#[error("document '{locator}' is unreadable: {reason}")]
pub struct DocumentUnreadable {
    pub locator: String,
    pub reason: String,
}

impl DocumentUnreadable {
    pub fn new(locator: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            locator: locator.into(),
            reason: reason.to_string(),
        }
    }
}

/// A single page of an otherwise readable document failed to extract.
///
/// Pages extracted before the failure stay usable; extraction of that
/// document stops at the failing page.
#[derive(Debug, Error)]
#[error("page {page_number} of '{locator}' failed to extract: {reason}")]
pub struct PageExtractError {
    pub locator: String,
    pub page_number: u32,
    pub reason: String,
}

/// Reading or writing the persistent index cache failed.
///
/// Always non-fatal: a failed read behaves like an empty cache, a failed
/// write is logged and ignored.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache payload could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}
