//! Aegis HTTP Server
//!
//! Serves the REST API behind the assistant UI and the compiled WASM
//! frontend bundle.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aegis_core::{Answerer, StubAnswerer};
use aegis_server::{router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Answer backend. The stub replies with a canned message until a scan
    // pipeline is plugged into the `Answerer` seam.
    let answerer: Arc<dyn Answerer> = Arc::new(StubAnswerer::new());
    tracing::info!("✓ Answer backend: {}", answerer.name());

    let state = AppState { answerer };

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());
    let app = router(state, &static_dir);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🛡 aegis server running on http://{}", addr);
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health     - Health check");
    tracing::info!("  POST /api/ask    - Submit a prompt");
    tracing::info!("  POST /api/login  - Obtain a session token");
    tracing::info!("  GET  /*          - Frontend bundle ({})", static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
