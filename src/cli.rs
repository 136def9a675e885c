//! One-shot command-line search
//!
//! Prompts for a single query, runs it through the fixed command-line preset
//! and prints numbered title/URL pairs.

use crate::config::Settings;
use crate::gateway::SearchGateway;
use crate::presets::PresetTable;
use crate::results::SearchResultItem;
use crate::search::{RequestBuilder, SearchService};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Preset id reported for command-line searches
pub const CLI_PRESET_ID: &str = "tiktok";

const PROMPT: &str = "Search here: ";
const RULE_WIDTH: usize = 60;

/// Search service configured with the command-line preset and result count.
///
/// The web preset table is not consulted; the only preset available is
/// `settings.search.cli_preset` under [`CLI_PRESET_ID`].
pub fn service_from_settings(settings: &Settings, gateway: Arc<dyn SearchGateway>) -> SearchService {
    let mut table = BTreeMap::new();
    table.insert(CLI_PRESET_ID.to_string(), settings.search.cli_preset.clone());
    let presets = Arc::new(PresetTable::new(table));
    let builder = RequestBuilder::new(presets, settings.search.cli_num_results);
    SearchService::new(builder, gateway)
}

/// Prompt once, search with the command-line preset, print the report.
///
/// Errors (including an empty query or a provider failure) are returned to
/// the caller, which ends the process.
pub async fn run<R, W>(
    service: &SearchService,
    mut input: R,
    output: &mut W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    input.read_line(&mut line).await?;
    let query = line.trim_end_matches(['\r', '\n']);

    let response = service.execute(query, CLI_PRESET_ID).await?;
    let report = render_report(response.query(), response.results());

    output.write_all(report.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

/// Format the results block printed after a search
pub fn render_report(query: &str, results: &[SearchResultItem]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{rule}");
    let _ = writeln!(out, "Search Results for: {query}");
    let _ = writeln!(out, "{rule}\n");

    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(out, "{}. Title: {}", i + 1, result.title);
        let _ = writeln!(out, "   URL: {}", result.url);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total results: {}", results.len());
    let _ = writeln!(out, "{rule}");
    out
}
