//! Wire Types
//!
//! JSON bodies spoken between the WASM frontend and the server. Shared
//! here so the handlers and the API client cannot drift apart.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ask`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

/// Success body of `POST /api/ask`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub message: String,
}

/// Body of `POST /api/login`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body of `POST /api/login`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body for any failed API call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
