//! HTTP channel: JSON chat endpoint and the static chat page.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

use super::reply_to;
use crate::pipeline::Responder;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Body of `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    /// A missing field is treated as an empty message.
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

/// Build the Axum router with the chat page and JSON endpoint.
pub fn chat_routes(responder: Arc<Responder>) -> Router {
    let state = AppState { responder };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "support-bot"
    }))
}

/// POST /chat
async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Json<ChatResponse> {
    let reply = reply_to(&state.responder, &req.message);
    info!(
        message_len = req.message.len(),
        reply_len = reply.len(),
        "Chat request handled"
    );
    Json(ChatResponse { reply })
}
