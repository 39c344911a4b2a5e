// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case folding that keeps byte offsets aligned with the original text.

/// Lowercases `value` without changing its byte length.
///
/// Window offsets are computed against the normalized text and then used
/// to slice the original page text when a snippet is built, so the two
/// strings must stay index-aligned. A char is folded only when its
/// lowercase form is a single char of the same UTF-8 width; everything
/// else is kept verbatim. Latin and Cyrillic (the token alphabet) fold
/// losslessly under this rule; oddities like 'İ' or 'ẞ' are left as-is
/// rather than shifting every offset after them.
pub fn normalize(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    if !c.is_uppercase() {
        return c;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) if folded.len_utf8() == c.len_utf8() => folded,
        _ => c,
    }
}
