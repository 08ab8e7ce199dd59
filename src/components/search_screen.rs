//! Search Screen
//!
//! Camera scanning on top, manual code entry below, and the inline
//! not-found message.

use leptos::prelude::*;

use crate::components::{ManualCodeForm, ScannerPanel};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchScreen() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="search-screen">
            <h1 class="scan-prompt">"Scan the basket's QR code."</h1>
            <ScannerPanel />
            <ManualCodeForm />
            {move || store.message().get().map(|msg| view! {
                <p class="lookup-message" role="alert">{msg}</p>
            })}
        </section>
    }
}
