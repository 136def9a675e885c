//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single normalized search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Page title (empty when the provider has none)
    pub title: String,
    /// Result URL
    pub url: String,
    /// Provider relevance score
    pub score: Option<f64>,
    /// Publication date as reported by the provider
    pub published_date: Option<String>,
    /// Author name
    pub author: Option<String>,
}

impl SearchResultItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            score: None,
            published_date: None,
            author: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_published_date(mut self, date: impl Into<String>) -> Self {
        self.published_date = Some(date.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Successful search response returned by `/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    success: bool,
    query: String,
    preset: String,
    results: Vec<SearchResultItem>,
    total: usize,
}

impl SearchResponse {
    /// `total` is always derived from `results`
    pub fn new(
        query: impl Into<String>,
        preset: impl Into<String>,
        results: Vec<SearchResultItem>,
    ) -> Self {
        Self {
            success: true,
            query: query.into(),
            preset: preset.into(),
            total: results.len(),
            results,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn preset(&self) -> &str {
        &self.preset
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn into_results(self) -> Vec<SearchResultItem> {
        self.results
    }
}
