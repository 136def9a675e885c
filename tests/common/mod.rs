//! Shared test doubles

#![allow(dead_code)]

use async_trait::async_trait;
use exa_search::{GatewayError, ProviderRecord, SearchGateway, SearchParams};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory gateway that records every call
pub struct FakeGateway {
    calls: AtomicUsize,
    last_params: Mutex<Option<SearchParams>>,
    outcome: Outcome,
}

enum Outcome {
    Records(Vec<Value>),
    Fail(String),
}

impl FakeGateway {
    pub fn with_records(records: Vec<Value>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_params: Mutex::new(None),
            outcome: Outcome::Records(records),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            last_params: Mutex::new(None),
            outcome: Outcome::Fail(message.to_string()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> Option<SearchParams> {
        self.last_params.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchGateway for FakeGateway {
    async fn search(&self, params: &SearchParams) -> Result<Vec<ProviderRecord>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_params.lock().unwrap() = Some(params.clone());

        match &self.outcome {
            Outcome::Records(records) => {
                Ok(records.iter().cloned().map(ProviderRecord::from).collect())
            }
            Outcome::Fail(message) => Err(GatewayError::Api {
                status: 503,
                message: message.clone(),
            }),
        }
    }
}

/// Two records in the provider's shape: one complete, one sparse
pub fn sample_records() -> Vec<Value> {
    vec![
        json!({
            "id": "https://www.tiktok.com/@barista/video/1",
            "title": "Latte art for beginners",
            "url": "https://www.tiktok.com/@barista/video/1",
            "score": 0.42,
            "publishedDate": "2024-05-02T00:00:00.000Z",
            "author": "barista"
        }),
        json!({
            "url": "https://www.tiktok.com/@roaster/video/2",
            "title": "Home roasting"
        }),
    ]
}
