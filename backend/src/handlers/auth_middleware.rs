use std::future::Future;
use std::sync::Arc;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::AppState;

/// Proof that the request carried the admin bearer token.
#[derive(Clone, Copy, Debug)]
pub struct AdminSession;

#[derive(Debug)]
pub struct AuthError {
    pub status: StatusCode,
    pub message: String,
}

impl AuthError {
    pub fn unauthorized(message: &str) -> Self {
        AuthError {
            status: StatusCode::UNAUTHORIZED,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
}

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = AuthError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        // same answer for a missing header and a wrong token
        let authorized = bearer_token(parts) == Some(state.admin.token.as_str());
        async move {
            if authorized {
                Ok(AdminSession)
            } else {
                Err(AuthError::unauthorized("Unauthorized"))
            }
        }
    }
}
