use crate::api::errors::{api_error, ApiError};
use crate::chat::ChatOrchestrator;
use crate::llm::ChatMessage;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Represents the request payload for a chat turn.
///
/// A missing `message` is tolerated and treated as an empty user turn.
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Represents the response payload after a successful chat turn
#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub image_urls: Vec<String>,
    pub assistant_message: ChatMessage,
}

/// Serves the static chat page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Runs one chat turn through the orchestrator
///
/// # Arguments
/// * `orchestrator` - Shared chat orchestrator
/// * `payload` - JSON payload containing the user message and history
///
/// # Returns
/// * `Result<Json<ChatResponse>, ApiError>` - Chat response or error
#[axum::debug_handler]
pub async fn chat(
    Extension(orchestrator): Extension<Arc<ChatOrchestrator>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let reply = orchestrator
        .handle_chat(&payload.message, &payload.history)
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))?;

    Ok(Json(ChatResponse {
        response: reply.response,
        image_urls: reply.image_urls,
        assistant_message: reply.assistant_message,
    }))
}
