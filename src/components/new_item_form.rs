//! New Item Form Component
//!
//! Adds an item to the open basket. The field is cleared after a
//! successful add.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_apply_view, store_open_code, use_app_store};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }
        let Some(code) = store_open_code(&store) else { return };

        spawn_local(async move {
            match commands::add_item(&code, &text).await {
                Ok(view) => {
                    set_new_text.set(String::new());
                    store_apply_view(&store, view);
                }
                Err(e) => log::error!("[DETAIL] add_item failed: {}", e),
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" title="Add item" disabled=move || new_text.get().trim().is_empty()>
                "+"
            </button>
        </form>
    }
}
