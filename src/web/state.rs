//! Application state shared across handlers

use crate::config::Settings;
use crate::gateway::SearchGateway;
use crate::presets::PresetTable;
use crate::search::{RequestBuilder, SearchService};
use std::sync::Arc;

/// Shared application state. Read-only after construction.
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Preset table
    pub presets: Arc<PresetTable>,
    /// Search pipeline
    pub search: Arc<SearchService>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state around a gateway
    pub fn new(settings: Settings, gateway: Arc<dyn SearchGateway>) -> anyhow::Result<Self> {
        let presets = Arc::new(PresetTable::new(settings.presets.clone()));
        let builder = RequestBuilder::new(presets.clone(), settings.search.num_results);
        let search = Arc::new(SearchService::new(builder, gateway));
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings: Arc::new(settings),
            presets,
            search,
            templates,
        })
    }

    /// Preset reported when a request names none
    pub fn default_preset(&self) -> &str {
        &self.settings.search.default_preset
    }
}
