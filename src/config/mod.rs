//! Configuration module for exa-search
//!
//! Handles loading settings from YAML files and environment variables, and
//! reading the provider credential.

mod settings;

pub use settings::*;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Environment variable holding the provider API key
pub const DEFAULT_API_KEY_ENV: &str = "EXA_API_KEY";

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "EXA_SEARCH_SETTINGS_PATH";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    MissingCredential(String),

    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Provider API key. Never printed by `Debug`.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from `var`. A missing or blank value is an error.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self(key)),
            _ => Err(ConfigError::MissingCredential(var.to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Operator-facing explanation printed when the credential is missing
pub fn missing_credential_help(var: &str) -> String {
    format!(
        "Error: {var} not found in environment variables.\n\
         Please create a .env file with your API key.\n\
         Get your API key from https://exa.ai"
    )
}

/// Load settings from an explicit path, or the first settings file found,
/// or defaults. Environment overrides are applied last.
pub fn load_settings(explicit: Option<PathBuf>) -> Result<Settings, ConfigError> {
    let mut settings = match explicit.or_else(find_settings_file) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();
    Ok(settings)
}

fn find_settings_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("exa-search/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("secret-value");
        assert_eq!(format!("{:?}", key), "ApiKey(****)");
        assert_eq!(key.expose(), "secret-value");
    }

    #[test]
    fn test_missing_credential() {
        let err = ApiKey::from_env("EXA_SEARCH_TEST_UNSET_KEY").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential(ref v) if v == "EXA_SEARCH_TEST_UNSET_KEY"));
        assert_eq!(
            err.to_string(),
            "EXA_SEARCH_TEST_UNSET_KEY not found in environment variables"
        );
    }

    #[test]
    fn test_credential_from_env() {
        std::env::set_var("EXA_SEARCH_TEST_SET_KEY", "abc123");
        let key = ApiKey::from_env("EXA_SEARCH_TEST_SET_KEY").unwrap();
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn test_help_names_variable() {
        let help = missing_credential_help("EXA_API_KEY");
        assert!(help.starts_with("Error: EXA_API_KEY not found"));
        assert!(help.contains("https://exa.ai"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = load_settings(Some(PathBuf::from("/nonexistent/exa-search.yml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
