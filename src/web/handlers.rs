//! HTTP request handlers

use super::state::AppState;
use super::templates::SCRIPT_JS;
use crate::error::SearchError;
use crate::results::SearchResponse;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use tera::Context;

/// Body of `POST /search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Search query
    #[serde(default)]
    pub query: Option<String>,
    /// Preset id
    #[serde(default)]
    pub preset: Option<String>,
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("title", "Exa Search");
    ctx.insert("default_preset", state.default_preset());
    ctx.insert("presets", state.presets.as_ref());

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Search handler
///
/// A body that is not JSON of the expected shape falls into the same generic
/// failure as any other pipeline error.
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, SearchError> {
    let Json(request) = payload.map_err(|e| SearchError::internal(e.body_text()))?;

    let query = request.query.unwrap_or_default();
    let preset = request
        .preset
        .unwrap_or_else(|| state.default_preset().to_string());

    let response = state.search.execute(&query, &preset).await?;
    Ok(Json(response))
}

/// Preset listing handler
pub async fn presets(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.presets.as_ref().clone())
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Front-end script handler
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}
