use std::sync::Arc;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::handlers::auth_middleware::AdminSession;
use crate::models::message_models::{sort_newest_first, ContactMessage};
use crate::AppState;

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<Json<Vec<ContactMessage>>, (StatusCode, Json<serde_json::Value>)> {
    let mut messages = state.message_store.list().map_err(|e| {
        tracing::error!("Error reading messages: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to read messages"})),
        )
    })?;

    sort_newest_first(&mut messages);
    Ok(Json(messages))
}
