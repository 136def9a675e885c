//! Settings structures for exa-search configuration

use super::ConfigError;
use crate::presets::{default_presets, tiktok_preset, Preset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Main settings structure, loadable from settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub search: SearchSettings,
    pub presets: BTreeMap<String, Preset>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            provider: ProviderSettings::default(),
            search: SearchSettings::default(),
            presets: default_presets(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("EXA_SEARCH_DEBUG") {
            self.server.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("EXA_SEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("EXA_SEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("EXA_BASE_URL") {
            self.provider.base_url = val;
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Verbose logging
    pub debug: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 5001,
            bind_address: "127.0.0.1".to_string(),
            debug: false,
        }
    }
}

/// Search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// API root; `/search` is appended
    pub base_url: String,
    /// Client-wide request timeout in seconds (none = no timeout)
    pub request_timeout: Option<f64>,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.exa.ai".to_string(),
            request_timeout: None,
            api_key_env: super::DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

/// Search behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Results requested per web search
    pub num_results: u32,
    /// Preset echoed back when a request names none
    pub default_preset: String,
    /// Results requested by the command-line tool
    pub cli_num_results: u32,
    /// Constraints used by the command-line tool, independent of `presets`
    pub cli_preset: Preset,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            num_results: 10,
            default_preset: "general".to_string(),
            cli_num_results: 5,
            cli_preset: tiktok_preset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5001);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert!(!settings.server.debug);
        assert_eq!(settings.provider.base_url, "https://api.exa.ai");
        assert_eq!(settings.provider.api_key_env, "EXA_API_KEY");
        assert!(settings.provider.request_timeout.is_none());
        assert_eq!(settings.search.num_results, 10);
        assert_eq!(settings.search.cli_num_results, 5);
        assert_eq!(settings.search.cli_preset, tiktok_preset());
        assert_eq!(settings.presets.len(), 6);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml("server:\n  port: 8080\n").unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.presets.len(), 6);
    }

    #[test]
    fn test_yaml_replaces_presets() {
        let yaml = r#"
presets:
  docs:
    domains: ["https://docs.rs"]
    type: keyword
    num_results: 10
    description: Search Rust docs
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.presets.len(), 1);
        assert!(settings.presets.contains_key("docs"));
        assert_eq!(settings.search.cli_preset, tiktok_preset());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            Settings::from_yaml("server: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
