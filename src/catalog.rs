// SPDX-License-Identifier: MIT OR Apache-2.0

//! The document catalog: which documents exist, where they live, and the
//! signature that decides whether a cached index is still valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One searchable document as declared in `catalog.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier, unique within the catalog.
    pub id: String,
    /// Display title shown with results.
    pub title: String,
    /// Locator handed to the page source (relative paths resolve against
    /// the catalog file's directory).
    pub path: String,
}

/// The full fixed set of documents to index and search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "document")]
    pub documents: Vec<CatalogEntry>,
}

impl Catalog {
    /// Loads a catalog from a TOML file:
    ///
    /// ```toml
    /// [[document]]
    /// id = "informatics-9"
    /// title = "Информатика 9 класс"
    /// path = "9kl.txt"
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog: Catalog = toml::from_str(&content)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;
        Ok(catalog)
    }

    /// Stable fingerprint of the catalog (ids, titles, paths, order).
    ///
    /// Any change invalidates the whole persistent index cache at once;
    /// there is no partial invalidation.
    pub fn signature(&self) -> String {
        let canonical =
            serde_json::to_string(&self.documents).unwrap_or_default();
        blake3::hash(canonical.as_bytes()).to_hex().to_string()
    }
}

/// Directory that relative document paths and the index cache resolve
/// against: the catalog file's parent, falling back to the current dir.
pub fn root_dir(catalog_path: &Path) -> std::path::PathBuf {
    catalog_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(|parent| parent.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, path: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: title.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn signature_is_stable_for_equal_catalogs() {
        let a = Catalog { documents: vec![entry("a", "A", "a.txt")] };
        let b = Catalog { documents: vec![entry("a", "A", "a.txt")] };
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn signature_changes_with_any_field() {
        let base = Catalog { documents: vec![entry("a", "A", "a.txt")] };
        let retitled = Catalog { documents: vec![entry("a", "A2", "a.txt")] };
        let moved = Catalog { documents: vec![entry("a", "A", "b.txt")] };
        let extended = Catalog {
            documents: vec![entry("a", "A", "a.txt"), entry("b", "B", "b.txt")],
        };
        assert_ne!(base.signature(), retitled.signature());
        assert_ne!(base.signature(), moved.signature());
        assert_ne!(base.signature(), extended.signature());
    }

    #[test]
    fn parses_toml_document_list() {
        let parsed: Catalog = toml::from_str(
            r#"
            [[document]]
            id = "one"
            title = "First"
            path = "one.txt"

            [[document]]
            id = "two"
            title = "Second"
            path = "two.txt"
            "#,
        )
        .expect("parse");
        assert_eq!(parsed.documents.len(), 2);
        assert_eq!(parsed.documents[0].id, "one");
        assert_eq!(parsed.documents[1].path, "two.txt");
    }
}
