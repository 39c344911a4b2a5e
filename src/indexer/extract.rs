// SPDX-License-Identifier: MIT OR Apache-2.0

//! The raw page extraction boundary.
//!
//! Turning a binary document into per-page plain text is a collaborator
//! concern; the indexer only sees `(page_number, text)` pairs. Extraction
//! is sequential per document so pages gathered before a failure are not
//! thrown away.

use std::path::{Path, PathBuf};

use crate::errors::{DocumentUnreadable, PageExtractError};

/// Sequential stream of 1-based pages for one document.
pub type PageIter<'a> = Box<dyn Iterator<Item = Result<(u32, String), PageExtractError>> + 'a>;

/// Supplies raw page text for document locators.
pub trait PageSource {
    /// Opens `locator` for page extraction.
    ///
    /// Failure here means the whole document is unreadable and gets
    /// dropped from indexing; per-page failures are reported through the
    /// returned iterator instead and keep earlier pages usable.
    fn open(&self, locator: &str) -> Result<PageIter<'_>, DocumentUnreadable>;
}

/// Plain-text files on disk, one page per form-feed-separated section.
///
/// A file without form feeds is a single page. Relative locators resolve
/// against `root`. This is the stand-in for a real document parser.
pub struct FsPageSource {
    root: PathBuf,
}

impl FsPageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, locator: &str) -> PathBuf {
        let path = Path::new(locator);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl PageSource for FsPageSource {
    fn open(&self, locator: &str) -> Result<PageIter<'_>, DocumentUnreadable> {
        let path = self.resolve(locator);
        let content = std::fs::read_to_string(&path)
            .map_err(|err| DocumentUnreadable::new(locator, err))?;

        let pages: Vec<(u32, String)> = content
            .split('\u{0c}')
            .enumerate()
            .map(|(index, text)| (index as u32 + 1, text.to_string()))
            .collect();

        Ok(Box::new(pages.into_iter().map(Ok)))
    }
}
