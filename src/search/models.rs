//! Search request parameter set

use crate::presets::SearchMode;
use serde::{Deserialize, Serialize};

/// Parameters sent to the provider for a single search.
///
/// Serializes to the provider's request body; unset constraints are omitted
/// entirely rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Search query string
    pub query: String,
    /// Number of results to request
    pub num_results: u32,
    /// Domain allow-list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    /// Content category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Search mode
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mode: Option<SearchMode>,
}

impl SearchParams {
    /// Unconstrained search
    pub fn new(query: impl Into<String>, num_results: u32) -> Self {
        Self {
            query: query.into(),
            num_results,
            include_domains: None,
            category: None,
            mode: None,
        }
    }

    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.include_domains = Some(domains);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// True when no domain, category or mode constraint is set
    pub fn is_unconstrained(&self) -> bool {
        self.include_domains.is_none() && self.category.is_none() && self.mode.is_none()
    }
}
