//! exa-search: HTTP front end
//!
//! This is the main entry point for the web server.

use anyhow::Result;
use clap::Parser;
use exa_search::{
    config::{self, missing_credential_help, ApiKey},
    gateway::ExaClient,
    telemetry,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

/// Preset-driven search front end for the Exa API
#[derive(Debug, Parser)]
#[command(name = "exa-search", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Load configuration
    let mut settings = config::load_settings(args.config)?;
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(bind) = args.bind {
        settings.server.bind_address = bind;
    }

    // Initialize logging
    telemetry::init(if settings.server.debug {
        Level::DEBUG
    } else {
        Level::INFO
    });

    info!("Starting exa-search v{}", exa_search::VERSION);

    let api_key = match ApiKey::from_env(&settings.provider.api_key_env) {
        Ok(key) => key,
        Err(_) => {
            eprintln!("{}", missing_credential_help(&settings.provider.api_key_env));
            std::process::exit(1);
        }
    };

    // Initialize provider client
    let gateway = ExaClient::new(&settings.provider, &api_key)?;
    info!("Provider client initialized for {}", gateway.endpoint());

    // Create application state
    let state = AppState::new(settings.clone(), Arc::new(gateway))?;
    info!("Loaded {} search presets", state.presets.len());

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let rule = "=".repeat(60);
    println!("\n{rule}\nExa Search Engine starting...\n{rule}");
    println!("Open your browser and navigate to: http://{addr}\n{rule}\n");

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
