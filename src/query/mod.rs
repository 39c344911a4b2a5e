// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query module - tokenization, proximity windows, snippets, search

pub mod search;
pub mod snippet;
pub mod window;

pub use search::{search, search_with_options, PageMatch, SearchOptions, SearchResult};
pub use snippet::{build_snippet, Snippet, CONTEXT_RADIUS};
pub use window::{find_windows, MatchWindow};
