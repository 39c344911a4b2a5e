// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for docgrep
//!
//! Loads configuration from .docgreprc.toml in the current directory or
//! ~/.config/docgrep/config.toml

use serde::Deserialize;
use std::path::PathBuf;

/// Defaults applied beneath CLI flags (CLI always wins).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of documents to print per search.
    pub max_results: Option<usize>,
    /// Snippet context radius in characters.
    pub context_radius: Option<usize>,
    /// Default output format (text or json).
    pub default_format: Option<String>,
    /// Default catalog file path.
    pub catalog: Option<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .docgreprc.toml in current directory
    /// 2. ~/.config/docgrep/config.toml
    pub fn load() -> Self {
        if let Some(config) = Self::load_from_path(&PathBuf::from(".docgreprc.toml")) {
            return config;
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("docgrep").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from_path(path: &PathBuf) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get output format from config, parsing the default_format string
    pub fn output_format(&self) -> Option<crate::cli::OutputFormat> {
        self.default_format
            .as_ref()
            .and_then(|value| match value.to_lowercase().as_str() {
                "json" => Some(crate::cli::OutputFormat::Json),
                "text" => Some(crate::cli::OutputFormat::Text),
                _ => None,
            })
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value.or(self.max_results).unwrap_or(10)
    }

    /// Context radius precedence: CLI flag, then config, then the default.
    pub fn merge_context_radius(&self, cli_value: Option<usize>) -> usize {
        cli_value
            .or(self.context_radius)
            .unwrap_or(crate::query::snippet::CONTEXT_RADIUS)
    }

    /// Catalog path precedence: CLI flag, then config, then catalog.toml.
    pub fn merge_catalog_path(&self, cli_value: Option<&str>) -> PathBuf {
        cli_value
            .map(PathBuf::from)
            .or_else(|| self.catalog.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("catalog.toml"))
    }
}
