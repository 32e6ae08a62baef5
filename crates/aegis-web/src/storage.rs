//! Client-side Token Storage
//!
//! The login gate keeps one token under a single localStorage key; its
//! presence decides the initial route.

use aegis_core::auth::AUTH_TOKEN_KEY;

/// Read the stored session token, if any.
pub fn auth_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(AUTH_TOKEN_KEY).ok()?
}

/// Persist the session token for subsequent visits.
pub fn store_auth_token(token: &str) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if storage.set_item(AUTH_TOKEN_KEY, token).is_err() {
        leptos::logging::warn!("failed to persist session token");
    }
}
