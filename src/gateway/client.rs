//! HTTP client for the Exa search API

use super::{GatewayError, ProviderRecord, SearchGateway};
use crate::config::{ApiKey, ProviderSettings};
use crate::search::SearchParams;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Credentialed provider client.
///
/// Built once at startup. `reqwest::Client` pools connections internally and
/// is safe to share, so no locking is needed around calls.
#[derive(Clone)]
pub struct ExaClient {
    client: Client,
    endpoint: Url,
}

impl ExaClient {
    /// Create a client for the configured provider
    pub fn new(settings: &ProviderSettings, api_key: &ApiKey) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key.expose())
            .map_err(|_| GatewayError::Client("API key is not a valid header value".into()))?;
        key.set_sensitive(true);
        headers.insert("x-api-key", key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("exa-search/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder()
            .default_headers(headers)
            .gzip(true)
            .brotli(true);

        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(Duration::from_secs_f64(timeout));
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: search_endpoint(&settings.base_url)?,
        })
    }

    /// Full URL searches are posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SearchGateway for ExaClient {
    async fn search(&self, params: &SearchParams) -> Result<Vec<ProviderRecord>, GatewayError> {
        debug!(endpoint = %self.endpoint, query = %params.query, "Calling provider");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(params)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: error_message(status, &text),
            });
        }

        let body: serde_json::Value = serde_json::from_str(&text)?;
        let records = match body.get("results") {
            Some(serde_json::Value::Array(results)) => results
                .iter()
                .cloned()
                .map(ProviderRecord::from)
                .collect::<Vec<_>>(),
            _ => return Err(GatewayError::MissingResults),
        };

        debug!(count = records.len(), "Provider returned results");
        Ok(records)
    }
}

/// Resolve `{base}/search`, keeping any path prefix on the base URL
fn search_endpoint(base_url: &str) -> Result<Url, GatewayError> {
    let mut base = Url::parse(base_url)
        .map_err(|e| GatewayError::Client(format!("invalid base URL {base_url:?}: {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("search")
        .map_err(|e| GatewayError::Client(format!("invalid base URL {base_url:?}: {e}")))
}

/// Pick the most useful message out of an error body
fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["error", "message"]
                .iter()
                .find_map(|key| json.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        });

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}
