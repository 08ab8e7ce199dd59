//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The backend owns
//! the real state; this store mirrors the latest `ScreenView` it returned.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Basket, PermissionView, Screen, ScreenView};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active screen
    pub screen: Screen,
    /// Basket shown on the detail screen
    pub basket: Option<Basket>,
    /// Inline message on the search screen (e.g. code not found)
    pub message: Option<String>,
    /// Camera permission as last resolved by the scan panel
    pub permission: Option<PermissionView>,
    /// Bumped for every scan result the backend announces
    pub scan_results: u64,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a snapshot from the backend.
///
/// The screen field is only written when it changes so the active screen
/// is not rebuilt on every item edit.
pub fn store_apply_view(store: &AppStore, view: ScreenView) {
    if store.screen().get_untracked() != view.screen {
        *store.screen().write() = view.screen;
    }
    *store.basket().write() = view.basket;
    *store.message().write() = view.message;
}

/// Apply a view pushed by a finished scan session
pub fn store_apply_scan_result(store: &AppStore, view: ScreenView) {
    store_apply_view(store, view);
    *store.scan_results().write() += 1;
}

/// Record the resolved camera permission
pub fn store_set_permission(store: &AppStore, permission: PermissionView) {
    *store.permission().write() = Some(permission);
}

/// Code of the open basket, if any
pub fn store_open_code(store: &AppStore) -> Option<String> {
    store.basket().get_untracked().map(|basket| basket.code)
}
