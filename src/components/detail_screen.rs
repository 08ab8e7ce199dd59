//! Basket Detail Screen
//!
//! Status, add form and item list for the open basket.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ItemRow, NewItemForm, StatusBadge};
use crate::store::{store_apply_view, store_open_code, use_app_store, AppStateStoreFields};

#[component]
pub fn DetailScreen() -> impl IntoView {
    let store = use_app_store();

    let go_back = move |_| {
        spawn_local(async move {
            match commands::go_back().await {
                Ok(view) => store_apply_view(&store, view),
                Err(e) => log::error!("[DETAIL] go_back failed: {}", e),
            }
        });
    };

    let remove_item = move |name: String| {
        let Some(code) = store_open_code(&store) else { return };
        spawn_local(async move {
            match commands::remove_item(&code, &name).await {
                Ok(view) => store_apply_view(&store, view),
                Err(e) => log::error!("[DETAIL] remove_item failed: {}", e),
            }
        });
    };

    let title = move || {
        let code = store.basket().get().map(|b| b.code).unwrap_or_default();
        format!("Basket: {}", code)
    };

    view! {
        <section class="detail-screen">
            <header class="detail-header">
                <button class="back-btn" title="Back" on:click=go_back>"←"</button>
                <h1>{title}</h1>
            </header>

            <div class="status-card">
                <span class="status-label">"Status: "</span>
                {move || store.basket().get().map(|b| view! { <StatusBadge status=b.status /> })}
            </div>

            <NewItemForm />

            <h2>"Contents"</h2>
            {move || {
                let items = store.basket().get().map(|b| b.items).unwrap_or_default();
                if items.is_empty() {
                    view! { <p class="empty-basket">"This basket is empty."</p> }.into_any()
                } else {
                    view! {
                        <ul class="item-list">
                            {items.into_iter().map(|name| view! {
                                <ItemRow name=name on_remove=Callback::new(remove_item) />
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </section>
    }
}
