//! exa-search-cli: one-shot command-line search
//!
//! Asks for a query on stdin and prints the results of the fixed
//! command-line preset.

use anyhow::Result;
use exa_search::{
    cli,
    config::{self, missing_credential_help, ApiKey},
    gateway::ExaClient,
    telemetry,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init(Level::WARN);

    let settings = config::load_settings(None)?;

    let api_key = match ApiKey::from_env(&settings.provider.api_key_env) {
        Ok(key) => key,
        Err(_) => {
            eprintln!("{}", missing_credential_help(&settings.provider.api_key_env));
            std::process::exit(1);
        }
    };

    let gateway = ExaClient::new(&settings.provider, &api_key)?;
    let service = cli::service_from_settings(&settings, Arc::new(gateway));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    cli::run(&service, stdin, &mut stdout).await
}
