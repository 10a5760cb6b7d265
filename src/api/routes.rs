//! API routes configuration module

use crate::api::handlers::{chat, index};
use crate::chat::ChatOrchestrator;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `orchestrator` - Chat orchestrator to be shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all endpoints and middleware
pub fn app(orchestrator: Arc<ChatOrchestrator>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .layer(Extension(orchestrator))
}
