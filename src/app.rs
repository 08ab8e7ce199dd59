//! Basket Scan Frontend App
//!
//! Two screens switched by the backend navigator: search/scan and basket
//! detail.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{DetailScreen, SearchScreen};
use crate::models::Screen;
use crate::store::{store_apply_scan_result, store_apply_view, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide store to all children
    provide_context(store);

    // Load the current screen and follow scan-driven navigation
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_screen().await {
                Ok(view) => store_apply_view(&store, view),
                Err(e) => log::error!("[APP] Failed to load screen: {}", e),
            }
            if let Err(e) = commands::listen_navigation(move |view| {
                log::debug!("[APP] Navigation event: {:?}", view.screen);
                store_apply_scan_result(&store, view);
            })
            .await
            {
                log::error!("[APP] Failed to listen for navigation: {}", e);
            }
        });
    });

    view! {
        <div class="app-shell">
            {move || match store.screen().get() {
                Screen::Searching => view! { <SearchScreen /> }.into_any(),
                Screen::Viewing { .. } => view! { <DetailScreen /> }.into_any(),
            }}
        </div>
    }
}
