// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal proximity windows over token occurrences.
//!
//! This is the "smallest range covering elements from all lists" sweep,
//! run over the occurrence positions of each query token within one
//! page. It answers: which contiguous spans of the page prove that every
//! token is present, and which of those spans are tightest?

use std::collections::HashSet;

/// A span of a page's normalized text (byte offsets, `start <= end`)
/// containing at least one occurrence of every required token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWindow {
    pub start: usize,
    pub end: usize,
}

impl MatchWindow {
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy)]
struct TokenOccurrence {
    token_index: usize,
    start: usize,
    end: usize,
}

/// Finds every minimal window of `text` covering all `tokens`, sorted by
/// width ascending then start ascending (tightest clusters first).
///
/// Returns an empty vec when `tokens` is empty or any token never occurs:
/// matching is an AND over all tokens.
pub fn find_windows(text: &str, tokens: &[String]) -> Vec<MatchWindow> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut occurrences: Vec<TokenOccurrence> = Vec::new();
    for (token_index, token) in tokens.iter().enumerate() {
        let positions = find_all_occurrences(text, token);
        if positions.is_empty() {
            return Vec::new();
        }
        occurrences.extend(positions.into_iter().map(|start| TokenOccurrence {
            token_index,
            start,
            end: start + token.len(),
        }));
    }
    occurrences.sort_by_key(|occurrence| occurrence.start);

    let mut counts = vec![0usize; tokens.len()];
    let mut covered = 0usize;
    let mut left = 0usize;
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut windows: Vec<MatchWindow> = Vec::new();

    for right in 0..occurrences.len() {
        let token_index = occurrences[right].token_index;
        if counts[token_index] == 0 {
            covered += 1;
        }
        counts[token_index] += 1;

        // Shrink from the left while every token is still covered,
        // recording each candidate along the way.
        while covered == tokens.len() && left <= right {
            let window = &occurrences[left..=right];
            let start = window[0].start;
            let end = window
                .iter()
                .map(|occurrence| occurrence.end)
                .max()
                .unwrap_or(start);

            if seen.insert((start, end)) {
                windows.push(MatchWindow { start, end });
            }

            let left_token = occurrences[left].token_index;
            counts[left_token] -= 1;
            if counts[left_token] == 0 {
                covered -= 1;
            }
            left += 1;
        }
    }

    windows.sort_by(|a, b| a.width().cmp(&b.width()).then(a.start.cmp(&b.start)));
    windows
}

/// Start offsets of every non-overlapping occurrence of `token` in `text`,
/// scanning left to right and resuming after each match.
fn find_all_occurrences(text: &str, token: &str) -> Vec<usize> {
    if token.is_empty() {
        return Vec::new();
    }
    text.match_indices(token).map(|(start, _)| start).collect()
}
