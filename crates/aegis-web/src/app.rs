//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::{AgentPage, LoginPage};
use crate::storage;

/// Root application component
///
/// `/` and `/app` only render the agent page for a signed-in visitor;
/// everyone else is sent to `/login`. The stored token is read once per
/// page load.
#[component]
pub fn App() -> impl IntoView {
    let (logged_in, set_logged_in) = signal(storage::auth_token().is_some());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/login") view=move || view! { <LoginPage set_logged_in /> } />
                    <Route path=path!("/") view=move || view! { <Gated logged_in /> } />
                    <Route path=path!("/app") view=move || view! { <Gated logged_in /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Renders the agent page only when the login gate has been passed.
#[component]
fn Gated(logged_in: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show
            when=move || logged_in.get()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <AgentPage />
        </Show>
    }
}
