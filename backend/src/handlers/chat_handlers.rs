use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::openrouter::{ChatReply, TranscriptEntry};
use crate::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<TranscriptEntry>,
}

pub async fn send_chat_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, (StatusCode, Json<serde_json::Value>)> {
    let Json(chat_req) = payload.map_err(|rejection| {
        tracing::warn!("Rejected chat body: {}", rejection);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid chat request"})),
        )
    })?;
    if chat_req.message.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Message cannot be empty"})),
        ));
    }

    let reply = state
        .chat_relay
        .relay(&chat_req.message, &chat_req.history)
        .await;
    Ok(Json(reply))
}
