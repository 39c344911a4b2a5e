// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query tokenization with a camel-case / underscore split pass.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::normalize::normalize;

/// Maximal runs of Latin/Cyrillic letters and digits. Punctuation,
/// whitespace and underscores are delimiters, never token content.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[a-zа-яё0-9]+").expect("token regex"));

/// A lowercase letter immediately followed by an uppercase one marks a
/// word boundary inside a compound run ("главаТекста", "pageIndex").
static CASE_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zа-яё])([A-ZА-ЯЁ])").expect("case boundary regex"));

/// Extracts the distinct normalized tokens of `query`, in first-seen order.
///
/// Each raw run is added whole (single chars included), then split at
/// camel-case boundaries and on whitespace/underscores; sub-parts longer
/// than one char are added too, approximating identifier-aware search:
/// "chapter_5" finds pages spelling it "Chapter5", and the sub-parts of
/// "главаТекста" pull their standalone occurrences into window scoring.
/// Boundary detection runs on the raw text, before case folding erases
/// the boundary.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tokens = Vec::new();
    let mut push = |token: String, tokens: &mut Vec<String>| {
        if !token.is_empty() && seen.insert(token.clone()) {
            tokens.push(token);
        }
    };

    for run in TOKEN_RE.find_iter(query) {
        let raw = run.as_str();
        push(normalize(raw), &mut tokens);

        let spaced = CASE_BOUNDARY_RE.replace_all(raw, "$1 $2");
        for part in spaced.split(|c: char| c.is_whitespace() || c == '_') {
            if part.chars().count() > 1 {
                push(normalize(part), &mut tokens);
            }
        }
    }

    tokens
}
