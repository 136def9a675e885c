//! Search gateway
//!
//! The single point of contact with the external search provider. The
//! production implementation is [`ExaClient`]; the web and command-line
//! layers only see the [`SearchGateway`] trait so tests can substitute a fake.

mod client;
mod error;

pub use client::ExaClient;
pub use error::GatewayError;

use crate::search::SearchParams;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A result record exactly as the provider returned it.
///
/// Kept as raw JSON: the provider's record shape varies by category and
/// mode, and field extraction is left to the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderRecord(pub serde_json::Value);

impl ProviderRecord {
    /// Look up a top-level field
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

impl From<serde_json::Value> for ProviderRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Executes searches against the provider.
///
/// Implementations must be usable from many concurrent requests through a
/// shared reference.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Run one search. Records come back in provider relevance order.
    async fn search(&self, params: &SearchParams) -> Result<Vec<ProviderRecord>, GatewayError>;
}
