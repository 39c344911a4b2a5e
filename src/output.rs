// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal output helpers: color policy, highlight rendering, JSON.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::IsTerminal;

/// Colors are used only on a tty and never when NO_COLOR is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Prints `value` as JSON, pretty unless `compact`.
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Renders a snippet with its highlight span emphasized.
///
/// `match_index`/`highlight_length` are byte offsets into `snippet` and
/// always fall on char boundaries (token matches never split a char).
pub fn render_snippet(
    snippet: &str,
    match_index: usize,
    highlight_length: usize,
    use_color: bool,
) -> String {
    if !use_color {
        return snippet.to_string();
    }
    let (before, rest) = snippet.split_at(match_index);
    let (matched, after) = rest.split_at(highlight_length.min(rest.len()));
    format!("{before}{}{after}", matched.yellow().bold())
}
