//! Item Row Component

use leptos::prelude::*;

/// One basket item with its delete button
#[component]
pub fn ItemRow(
    name: String,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let label = name.clone();

    view! {
        <li class="item-row">
            <span class="item-name">{label}</span>
            <button
                class="delete-btn"
                title="Remove item"
                on:click=move |_| on_remove.run(name.clone())
            >
                "🗑"
            </button>
        </li>
    }
}
