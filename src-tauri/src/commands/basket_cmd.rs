//! Tauri Commands for Basket Lookup and Editing
//!
//! Every command returns the fresh `ScreenView` so the frontend can redraw
//! from a single snapshot.

use tauri::State;

use crate::domain::CodeSource;
use crate::navigation::ScreenView;
use crate::AppState;

/// Current screen snapshot
#[tauri::command]
pub async fn get_screen(state: State<'_, AppState>) -> Result<ScreenView, String> {
    let session = state.session.lock().await;
    Ok(session.view())
}

/// Submit a candidate code from the search screen
#[tauri::command]
pub async fn submit_code(
    state: State<'_, AppState>,
    code: String,
    source: Option<CodeSource>,
) -> Result<ScreenView, String> {
    let mut session = state.session.lock().await;
    session
        .submit(&code, source.unwrap_or_default())
        .map_err(|e| e.to_string())
}

/// Append an item to a basket
#[tauri::command]
pub async fn add_item(
    state: State<'_, AppState>,
    code: String,
    item_name: String,
) -> Result<ScreenView, String> {
    let mut session = state.session.lock().await;
    session.add_item(&code, &item_name).map_err(|e| e.to_string())
}

/// Remove the first matching item from a basket
#[tauri::command]
pub async fn remove_item(
    state: State<'_, AppState>,
    code: String,
    item_name: String,
) -> Result<ScreenView, String> {
    let mut session = state.session.lock().await;
    session.remove_item(&code, &item_name).map_err(|e| e.to_string())
}

/// Leave the detail screen
#[tauri::command]
pub async fn go_back(state: State<'_, AppState>) -> Result<ScreenView, String> {
    let mut session = state.session.lock().await;
    Ok(session.back())
}
