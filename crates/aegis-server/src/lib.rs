//! Aegis HTTP Server
//!
//! Axum-based server exposing the ask and login endpoints and serving the
//! compiled WASM frontend as static files.

pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{ask_handler, health_check, login_handler};
use crate::state::AppState;

/// Build the application router with all routes and middleware.
///
/// Anything not matched by the API routes falls through to the static
/// frontend bundle in `static_dir`.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/ask", post(ask_handler))
        .route("/api/login", post(login_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
