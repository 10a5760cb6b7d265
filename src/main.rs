//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and
//! configuration, builds the outbound API clients once, and starts the
//! HTTP server that relays chat turns to the completion provider.

mod api;
mod chat;
mod cli;
mod config;
mod constants;
mod errors;
mod llm;
mod search;
mod utils;

use chat::ChatOrchestrator;
use clap::Parser;
use llm::LlmClient;
use search::ImageSearchClient;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables
/// 4. Build the LLM and image-search clients
/// 5. Launch the HTTP server
#[tokio::main]
async fn main() {
    let cli = cli::Cli::try_parse().expect("Failed to parse CLI arguments");
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let config = config::AppConfig::from_env();
    let port = cli.port.unwrap_or(config.port);

    let llm_client = match LlmClient::new(&config.llm_provider, &config.llm_model) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize LLM client: {}", e);
            std::process::exit(1);
        }
    };
    let search_client = ImageSearchClient::new(config.google_api_key, config.google_cse_id);
    let orchestrator = Arc::new(ChatOrchestrator::new(llm_client, search_client));

    info!("Starting chat server on port {}", port);
    if let Err(e) = api::server::launch_server(port, orchestrator).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
