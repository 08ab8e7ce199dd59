//! Manual Code Form Component
//!
//! Typed alternative to scanning. Submit stays disabled while the field is
//! blank.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_apply_view, use_app_store};

#[component]
pub fn ManualCodeForm() -> impl IntoView {
    let store = use_app_store();
    let (code, set_code) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = code.get();
        if raw.trim().is_empty() { return; }

        spawn_local(async move {
            match commands::submit_manual_code(&raw).await {
                Ok(view) => store_apply_view(&store, view),
                Err(e) => log::error!("[SEARCH] submit_code failed: {}", e),
            }
        });
    };

    view! {
        <form class="manual-code-form" on:submit=submit>
            <input
                type="text"
                placeholder="Basket code (e.g. SEPET001)"
                autocapitalize="characters"
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || code.get().trim().is_empty()>
                "Find"
            </button>
        </form>
    }
}
