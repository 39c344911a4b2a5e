// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded-context snippets around a matched window.

/// Characters of context kept on each side of a match.
pub const CONTEXT_RADIUS: usize = 80;

const ELLIPSIS: &str = "...";

/// A user-facing excerpt of the original page text.
///
/// `match_index`/`highlight_length` are byte offsets into `snippet`;
/// `match_index + highlight_length <= snippet.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub snippet: String,
    pub match_index: usize,
    pub highlight_length: usize,
}

/// Cuts `page_text` around `[match_start, match_end)` with `context_radius`
/// chars of context per side, marking truncated sides with an ellipsis.
///
/// The match offsets come from the page's normalized text, which is
/// byte-aligned with the original (see [`crate::normalize::normalize`]),
/// so they can be applied to the original text directly. The context
/// bounds are snapped outward to char boundaries.
pub fn build_snippet(
    page_text: &str,
    match_start: usize,
    match_end: usize,
    context_radius: usize,
) -> Snippet {
    let snippet_start = step_back(page_text, match_start, context_radius);
    let snippet_end = step_forward(page_text, match_end, context_radius);

    let prefix = if snippet_start > 0 { ELLIPSIS } else { "" };
    let suffix = if snippet_end < page_text.len() { ELLIPSIS } else { "" };
    let snippet = format!("{prefix}{}{suffix}", &page_text[snippet_start..snippet_end]);

    let match_index = prefix.len() + (match_start - snippet_start);
    let highlight_length = (match_end - match_start)
        .max(1)
        .min(snippet.len() - match_index);

    Snippet {
        snippet,
        match_index,
        highlight_length,
    }
}

/// Byte offset `count` chars before `pos`, clamped at the start.
fn step_back(text: &str, pos: usize, count: usize) -> usize {
    let mut offset = pos;
    for _ in 0..count {
        match text[..offset].chars().next_back() {
            Some(c) => offset -= c.len_utf8(),
            None => break,
        }
    }
    offset
}

/// Byte offset `count` chars after `pos`, clamped at the end.
fn step_forward(text: &str, pos: usize, count: usize) -> usize {
    let mut offset = pos;
    for _ in 0..count {
        match text[offset..].chars().next() {
            Some(c) => offset += c.len_utf8(),
            None => break,
        }
    }
    offset
}
