//! UI Components

use leptos::prelude::*;

/// Top bar with product branding
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <div class="top-bar">
            <h1>"Aegis"</h1>
        </div>
    }
}

/// Footer copyright line
#[component]
pub fn Copyright() -> impl IntoView {
    view! {
        <div class="copyright">"© InterSources Inc 2024"</div>
    }
}
