//! Translates a query and preset id into provider parameters

use super::models::SearchParams;
use crate::presets::PresetTable;
use std::sync::Arc;

/// Builds [`SearchParams`] from a query and a preset id
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    presets: Arc<PresetTable>,
    num_results: u32,
}

impl RequestBuilder {
    pub fn new(presets: Arc<PresetTable>, num_results: u32) -> Self {
        Self {
            presets,
            num_results,
        }
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    pub fn num_results(&self) -> u32 {
        self.num_results
    }

    /// Build the parameter set. `query` is expected to be trimmed and
    /// non-empty; validation happens in the caller.
    ///
    /// A recognised preset overlays its domains, category and mode. Domain and
    /// category are passed through independently, both may be set at once.
    /// An unknown preset yields a bare query.
    pub fn build(&self, query: &str, preset_id: &str) -> SearchParams {
        let mut params = SearchParams::new(query, self.num_results);

        if let Some(preset) = self.presets.get(preset_id) {
            if let Some(ref domains) = preset.domains {
                params = params.with_domains(domains.clone());
            }
            if let Some(ref category) = preset.category {
                params = params.with_category(category.clone());
            }
            params = params.with_mode(preset.mode);
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{Preset, SearchMode};
    use std::collections::BTreeMap;

    fn builder() -> RequestBuilder {
        RequestBuilder::new(Arc::new(PresetTable::default()), 10)
    }

    #[test]
    fn test_tiktok_preset() {
        let params = builder().build("coffee", "tiktok");
        assert_eq!(
            params,
            SearchParams {
                query: "coffee".to_string(),
                num_results: 10,
                include_domains: Some(vec!["https://www.tiktok.com".to_string()]),
                category: None,
                mode: Some(SearchMode::Keyword),
            }
        );
    }

    #[test]
    fn test_unknown_preset_is_unconstrained() {
        let params = builder().build("coffee", "unknown_preset");
        assert_eq!(params, SearchParams::new("coffee", 10));
        assert!(params.is_unconstrained());

        let params = builder().build("coffee", "general");
        assert!(params.is_unconstrained());
    }

    #[test]
    fn test_every_preset_is_mirrored() {
        let builder = builder();
        for (id, preset) in builder.presets().iter() {
            let params = builder.build("rust", id);
            assert_eq!(params.query, "rust");
            assert_eq!(params.num_results, 10);
            assert_eq!(params.include_domains, preset.domains, "preset {id}");
            assert_eq!(params.category, preset.category, "preset {id}");
            assert_eq!(params.mode, Some(preset.mode), "preset {id}");
        }
    }

    #[test]
    fn test_category_preset() {
        let params = builder().build("llm agents", "papers");
        assert_eq!(params.category.as_deref(), Some("papers"));
        assert!(params.include_domains.is_none());
        assert_eq!(params.mode, Some(SearchMode::Neural));
    }

    #[test]
    fn test_domain_and_category_both_pass_through() {
        let mut presets = BTreeMap::new();
        presets.insert(
            "both".to_string(),
            Preset::new(SearchMode::Neural, "Both")
                .with_domains(["https://example.com"])
                .with_category("news"),
        );
        let builder = RequestBuilder::new(Arc::new(PresetTable::new(presets)), 10);

        let params = builder.build("q", "both");
        assert_eq!(params.include_domains, Some(vec!["https://example.com".to_string()]));
        assert_eq!(params.category.as_deref(), Some("news"));
    }

    #[test]
    fn test_preset_result_count_does_not_override() {
        let mut presets = BTreeMap::new();
        presets.insert(
            "few".to_string(),
            Preset::new(SearchMode::Keyword, "Few").with_num_results(3),
        );
        let builder = RequestBuilder::new(Arc::new(PresetTable::new(presets)), 5);

        assert_eq!(builder.build("q", "few").num_results, 5);
    }
}
