//! Search presets
//!
//! A preset is a named bundle of provider constraints (domain allow-list,
//! category, search mode) offered to users as a one-click shortcut.

mod table;

pub use table::{default_presets, tiktok_preset, PresetTable};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Retrieval mode understood by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Lexical match
    Keyword,
    /// Embedding-based retrieval
    Neural,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Keyword => "keyword",
            SearchMode::Neural => "neural",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single preset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Restrict results to these sites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    /// Provider content category (e.g. "news", "tweet")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Search mode
    #[serde(rename = "type")]
    pub mode: SearchMode,
    /// Advertised result count
    pub num_results: u32,
    /// Human-readable description shown in the UI
    pub description: String,
}

impl Preset {
    pub fn new(mode: SearchMode, description: impl Into<String>) -> Self {
        Self {
            domains: None,
            category: None,
            mode,
            num_results: 10,
            description: description.into(),
        }
    }

    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_num_results(mut self, num_results: u32) -> Self {
        self.num_results = num_results;
        self
    }
}
