use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::handlers::auth_dtos::ContactRequest;
use crate::models::message_models::NewContactMessage;
use crate::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let missing_fields = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing required fields"})),
        )
    };

    // null fields and unreadable bodies count as missing
    let Json(contact_req) = payload.map_err(|rejection| {
        tracing::warn!("Rejected contact body: {}", rejection);
        missing_fields()
    })?;
    if !contact_req.is_complete() {
        return Err(missing_fields());
    }

    let saved = state
        .message_store
        .append(NewContactMessage {
            name: contact_req.name,
            email: contact_req.email,
            message: contact_req.message,
        })
        .map_err(|e| {
            tracing::error!("Error saving message: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to save message"})),
            )
        })?;

    tracing::info!("Stored contact message {}", saved.id);
    Ok(Json(json!({
        "success": true,
        "message": "Message sent successfully"
    })))
}
