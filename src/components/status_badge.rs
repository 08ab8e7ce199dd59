//! Status Badge Component

use leptos::prelude::*;

use crate::models::BasketStatus;

/// Color-coded basket status
#[component]
pub fn StatusBadge(status: BasketStatus) -> impl IntoView {
    view! {
        <span class="status-badge" style=format!("color: {}", status.color())>
            {status.label()}
        </span>
    }
}
