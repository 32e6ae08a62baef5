//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use aegis_core::auth;
use aegis_core::wire::{AskRequest, AskResponse, ErrorResponse, LoginRequest, LoginResponse};
use aegis_core::Answerer;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub answerer: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        answerer: state.answerer.name(),
    })
}

/// Ask endpoint: one prompt in, one answer message out
pub async fn ask_handler(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let prompt = payload.prompt.trim();
    if prompt.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "prompt must not be empty".into(),
            }),
        ));
    }

    let message = state.answerer.answer(prompt).await.map_err(|e| {
        tracing::error!("answer backend error: {e}");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: "answer backend failed".into(),
            }),
        )
    })?;

    Ok(Json(AskResponse { message }))
}

/// Login endpoint: verifies the development credentials and issues a token
pub async fn login_handler(
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    if !auth::verify_credentials(&payload.username, &payload.password) {
        tracing::warn!(username = %payload.username, "rejected login attempt");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "invalid username or password".into(),
            }),
        ));
    }

    Ok(Json(LoginResponse {
        token: uuid::Uuid::new_v4().to_string(),
    }))
}
