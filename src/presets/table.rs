//! Read-only preset table

use super::{Preset, SearchMode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Immutable mapping from preset id to configuration.
///
/// Built once at startup and shared behind an `Arc`; there are no mutating
/// operations after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PresetTable {
    presets: BTreeMap<String, Preset>,
}

impl PresetTable {
    /// Create a table from an explicit set of presets
    pub fn new(presets: BTreeMap<String, Preset>) -> Self {
        Self { presets }
    }

    /// Look up a preset. Unknown ids are not an error; callers fall back to
    /// an unconstrained search.
    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.get(id)
    }

    /// Iterate over all presets in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Preset)> {
        self.presets.iter().map(|(id, preset)| (id.as_str(), preset))
    }

    /// All preset ids in order
    pub fn ids(&self) -> Vec<&str> {
        self.presets.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.presets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        Self::new(default_presets())
    }
}

impl From<BTreeMap<String, Preset>> for PresetTable {
    fn from(presets: BTreeMap<String, Preset>) -> Self {
        Self::new(presets)
    }
}

/// TikTok keyword search, also the fixed command-line preset
pub fn tiktok_preset() -> Preset {
    Preset::new(SearchMode::Keyword, "Search TikTok videos").with_domains(["https://www.tiktok.com"])
}

/// The built-in presets
pub fn default_presets() -> BTreeMap<String, Preset> {
    let mut presets = BTreeMap::new();

    presets.insert("tiktok".to_string(), tiktok_preset());
    presets.insert(
        "twitter".to_string(),
        Preset::new(SearchMode::Neural, "Search Twitter/X posts").with_category("tweet"),
    );
    presets.insert(
        "wikipedia".to_string(),
        Preset::new(SearchMode::Neural, "Search Wikipedia articles")
            .with_domains(["https://wikipedia.org"]),
    );
    presets.insert(
        "papers".to_string(),
        Preset::new(SearchMode::Neural, "Search academic papers").with_category("papers"),
    );
    presets.insert(
        "news".to_string(),
        Preset::new(SearchMode::Neural, "Search news articles").with_category("news"),
    );
    presets.insert(
        "github".to_string(),
        Preset::new(SearchMode::Neural, "Search GitHub repositories").with_category("github"),
    );

    presets
}
