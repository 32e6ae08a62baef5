//! API Client

use aegis_core::error::AegisError;
use aegis_core::wire::{AskRequest, AskResponse, ErrorResponse, LoginRequest, LoginResponse};

/// Submit a prompt to the backend and return the answer message.
///
/// Every failure variant is handled the same way by the caller; the
/// variants only exist so the console log says what actually went wrong.
pub async fn ask(prompt: &str) -> Result<String, AegisError> {
    let client = reqwest::Client::new();

    let response = client
        .post("/api/ask")
        .json(&AskRequest {
            prompt: prompt.to_string(),
        })
        .send()
        .await
        .map_err(|e| AegisError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AegisError::Status(response.status().as_u16()));
    }

    let body: AskResponse = response
        .json()
        .await
        .map_err(|e| AegisError::Decode(e.to_string()))?;

    Ok(body.message)
}

/// Exchange credentials for a session token.
pub async fn login(username: &str, password: &str) -> Result<String, AegisError> {
    let client = reqwest::Client::new();

    let response = client
        .post("/api/login")
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .send()
        .await
        .map_err(|e| AegisError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        let reason = response
            .json::<ErrorResponse>()
            .await
            .map_or_else(|_| "login rejected".to_string(), |body| body.error);
        return Err(AegisError::Auth(reason));
    }

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| AegisError::Decode(e.to_string()))?;

    Ok(body.token)
}
