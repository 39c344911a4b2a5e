// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent index cache, invalidated wholesale by catalog signature.
//!
//! Best effort only: any unreadable, corrupt, outdated or mismatched
//! payload behaves exactly like an empty cache, and a failed write never
//! blocks the freshly built in-memory index from being used.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::errors::CacheError;
use crate::indexer::index::DocumentIndex;

pub(crate) const CACHE_VERSION: &str = "1";
pub(crate) const CACHE_DIR_REL: &str = ".docgrep";
pub(crate) const CACHE_FILE_REL: &str = ".docgrep/index-v1.json";
pub(crate) const CACHE_VERSION_FILE_REL: &str = ".docgrep/version";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedIndex {
    signature: String,
    documents: Vec<DocumentIndex>,
}

/// Filesystem-backed cache of extracted and indexed documents.
pub struct IndexCache {
    root: PathBuf,
}

impl IndexCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn file_path(&self) -> PathBuf {
        self.root.join(CACHE_FILE_REL)
    }

    /// Returns the cached documents if the stored signature equals
    /// `signature`; every failure mode reads as a miss.
    pub fn load(&self, signature: &str) -> Option<Vec<DocumentIndex>> {
        let content = std::fs::read_to_string(self.file_path()).ok()?;
        let payload: CachedIndex = serde_json::from_str(&content).ok()?;
        if payload.signature != signature {
            debug!("catalog signature changed, discarding cached index");
            return None;
        }
        if payload.documents.is_empty() {
            return None;
        }
        Some(payload.documents)
    }

    /// Atomically replaces the cache with `documents` under `signature`.
    pub fn store(
        &self,
        signature: &str,
        documents: &[DocumentIndex],
    ) -> Result<(), CacheError> {
        let payload = CachedIndex {
            signature: signature.to_string(),
            documents: documents.to_vec(),
        };
        let content = serde_json::to_string(&payload)?;

        std::fs::create_dir_all(self.root.join(CACHE_DIR_REL))?;
        atomic_write_bytes(
            &self.root.join(CACHE_VERSION_FILE_REL),
            format!("{CACHE_VERSION}\n").as_bytes(),
        )?;
        atomic_write_bytes(&self.file_path(), content.as_bytes())?;
        Ok(())
    }
}

/// Writes via a temp file in the same directory, fsyncs, then renames
/// over the destination so readers never observe a partial payload.
fn atomic_write_bytes(path: &Path, bytes: &[u8]) -> Result<(), CacheError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let tmp_name = format!(
        ".{}.tmp-{}-{}",
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("docgrep"),
        std::process::id(),
        nonce
    );
    let tmp_path = parent.join(tmp_name);

    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    if let Err(err) = std::fs::rename(&tmp_path, path) {
        if path.exists() {
            let _ = std::fs::remove_file(path);
            std::fs::rename(&tmp_path, path)?;
        } else {
            return Err(err.into());
        }
    }

    Ok(())
}
