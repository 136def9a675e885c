//! Search execution

use super::builder::RequestBuilder;
use crate::error::SearchError;
use crate::gateway::SearchGateway;
use crate::presets::PresetTable;
use crate::results::{normalize_all, SearchResponse};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Runs a query through builder, gateway and normalizer.
///
/// Holds no per-request state; one instance serves all concurrent requests.
pub struct SearchService {
    builder: RequestBuilder,
    gateway: Arc<dyn SearchGateway>,
}

impl SearchService {
    pub fn new(builder: RequestBuilder, gateway: Arc<dyn SearchGateway>) -> Self {
        Self { builder, gateway }
    }

    pub fn presets(&self) -> &PresetTable {
        self.builder.presets()
    }

    /// Execute a search. The query is trimmed first; an empty query is
    /// rejected before the gateway is touched. Failures discard the whole
    /// request, there are no partial results.
    pub async fn execute(&self, query: &str, preset: &str) -> Result<SearchResponse, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let params = self.builder.build(query, preset);
        let start = Instant::now();
        let records = self.gateway.search(&params).await?;
        let results = normalize_all(&records);

        info!(
            query = %query,
            preset = %preset,
            results = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Search completed"
        );

        Ok(SearchResponse::new(query, preset, results))
    }
}
