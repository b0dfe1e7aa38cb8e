use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::handlers::auth_dtos::{LoginRequest, LoginResponse};
use crate::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<serde_json::Value>)> {
    let admin = &state.admin;
    let invalid = || {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
    };

    // one message whichever half was wrong, or when the body is unreadable
    let Json(login_req) = payload.map_err(|rejection| {
        tracing::warn!("Rejected admin login body: {}", rejection);
        invalid()
    })?;
    if login_req.username != admin.username || login_req.password != admin.password {
        tracing::warn!("Rejected admin login attempt");
        return Err(invalid());
    }

    tracing::info!("Admin logged in");
    Ok(Json(LoginResponse {
        success: true,
        token: admin.token.clone(),
    }))
}
