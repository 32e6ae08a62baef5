//! Agent Page
//!
//! The single question/answer panel. All three pieces of transient state
//! (prompt, answer, loading flag) live in one `PromptPanel` held in a
//! reactive signal; DOM events map onto its methods.

use aegis_core::panel::PromptPanel;
use leptos::prelude::*;

use crate::api;
use crate::components::TopBar;

#[component]
pub fn AgentPage() -> impl IntoView {
    let panel = RwSignal::new(PromptPanel::new());

    view! {
        <div class="agent">
            <aside class="left-panel">
                "Chat History"
                <div class="about">"About"</div>
            </aside>

            <div class="agent-container">
                <TopBar />

                <div class="spotlight">
                    <input
                        type="text"
                        class="spotlight-input"
                        class:loading=move || panel.with(|p| p.is_loading())
                        placeholder="Ask me anything..."
                        prop:value=move || panel.with(|p| p.prompt().to_string())
                        disabled=move || panel.with(|p| p.is_loading())
                        on:input=move |ev| {
                            panel.update(|p| p.edit(event_target_value(&ev)));
                        }
                        on:keydown=move |ev| {
                            // Filters for the commit key and refuses to race an
                            // outstanding request; both checks live in the panel.
                            let Some(prompt) = panel.try_update(|p| p.key_down(&ev.key())).flatten()
                            else {
                                return;
                            };
                            leptos::task::spawn_local(async move {
                                let outcome = api::ask(&prompt).await;
                                if let Err(err) = &outcome {
                                    leptos::logging::error!("prompt submission failed: {err}");
                                }
                                panel.update(|p| p.settle(outcome));
                            });
                        }
                    />

                    <Show when=move || panel.with(|p| p.is_loading())>
                        <div class="spotlight-indicator">"..."</div>
                    </Show>

                    <div class="spotlight-answer">
                        {move || {
                            panel
                                .with(|p| p.answer().map(ToString::to_string))
                                .map(|answer| view! { <p>{answer}</p> })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
