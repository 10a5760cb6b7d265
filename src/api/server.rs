use crate::api::routes;
use crate::chat::ChatOrchestrator;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `port` - Port number to listen on for incoming HTTP connections
/// * `orchestrator` - Shared chat orchestrator injected into handlers
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Ok if server runs to completion, Error if it fails
pub async fn launch_server(
    port: u16,
    orchestrator: Arc<ChatOrchestrator>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = routes::app(orchestrator);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
