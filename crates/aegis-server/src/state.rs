//! Application State

use std::sync::Arc;

use aegis_core::Answerer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Answer backend behind the ask endpoint
    pub answerer: Arc<dyn Answerer>,
}
