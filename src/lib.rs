//! exa-search: a preset-driven front end for the Exa search API
//!
//! Maps named presets onto provider request parameters, performs the search
//! call and normalizes the results. Served over HTTP (`exa-search`) or as a
//! one-shot command-line tool (`exa-search-cli`).

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod presets;
pub mod results;
pub mod search;
pub mod telemetry;
pub mod web;

pub use config::Settings;
pub use error::{ErrorKind, SearchError};
pub use gateway::{ExaClient, GatewayError, ProviderRecord, SearchGateway};
pub use presets::{Preset, PresetTable, SearchMode};
pub use results::{SearchResponse, SearchResultItem};
pub use search::{RequestBuilder, SearchParams, SearchService};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
