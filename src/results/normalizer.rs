//! Maps provider records onto [`SearchResultItem`]
//!
//! Extraction is best-effort: a missing, null or wrongly typed field becomes
//! an absent value (or an empty string for title/URL), never an error.

use super::SearchResultItem;
use crate::gateway::ProviderRecord;
use serde_json::Value;

/// Date keys in lookup order. The API uses camelCase; snake_case shows up in
/// SDK-shaped payloads.
const DATE_KEYS: [&str; 2] = ["publishedDate", "published_date"];

/// Normalize one record
pub fn normalize(record: &ProviderRecord) -> SearchResultItem {
    SearchResultItem {
        title: string_field(record, "title").unwrap_or_default(),
        url: string_field(record, "url").unwrap_or_default(),
        score: score(record),
        published_date: DATE_KEYS
            .iter()
            .find_map(|key| string_field(record, key)),
        author: string_field(record, "author"),
    }
}

/// Normalize every record, keeping provider order
pub fn normalize_all(records: &[ProviderRecord]) -> Vec<SearchResultItem> {
    records.iter().map(normalize).collect()
}

fn string_field(record: &ProviderRecord, key: &str) -> Option<String> {
    record
        .field(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

fn score(record: &ProviderRecord) -> Option<f64> {
    match record.field("score")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
