//! Login Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::Copyright;
use crate::storage;

#[component]
pub fn LoginPage(set_logged_in: WriteSignal<bool>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (busy, set_busy) = signal(false);
    let navigate = use_navigate();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        set_busy.set(true);
        set_error.set(None);

        let user = username.get();
        let pass = password.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(token) => {
                    storage::store_auth_token(&token);
                    set_logged_in.set(true);
                    navigate("/app", Default::default());
                }
                Err(err) => {
                    leptos::logging::error!("login failed: {err}");
                    set_error.set(Some("Invalid username or password".into()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-branding">
                    <h1 class="login-branding-title">"Aegis"</h1>
                </div>
                <form class="login-form" on:submit=submit>
                    <input
                        type="text"
                        class="login-input"
                        placeholder="Enter your Username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="login-input"
                        placeholder="Enter your Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="login-button" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
            <Copyright />
        </div>
    }
}
