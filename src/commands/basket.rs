//! Basket Commands
//!
//! Frontend bindings for lookup, navigation and item editing.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::ScreenView;
use super::call;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SubmitCodeArgs<'a> {
    code: &'a str,
    source: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemArgs<'a> {
    code: &'a str,
    item_name: &'a str,
}

// ========================
// Commands
// ========================

pub async fn get_screen() -> Result<ScreenView, String> {
    call("get_screen", JsValue::NULL).await
}

/// Submit a typed code (trimmed and upper-cased by the backend)
pub async fn submit_manual_code(code: &str) -> Result<ScreenView, String> {
    let js_args = serde_wasm_bindgen::to_value(&SubmitCodeArgs { code, source: "manual" }).map_err(|e| e.to_string())?;
    call("submit_code", js_args).await
}

pub async fn add_item(code: &str, item_name: &str) -> Result<ScreenView, String> {
    let js_args = serde_wasm_bindgen::to_value(&ItemArgs { code, item_name }).map_err(|e| e.to_string())?;
    call("add_item", js_args).await
}

pub async fn remove_item(code: &str, item_name: &str) -> Result<ScreenView, String> {
    let js_args = serde_wasm_bindgen::to_value(&ItemArgs { code, item_name }).map_err(|e| e.to_string())?;
    call("remove_item", js_args).await
}

pub async fn go_back() -> Result<ScreenView, String> {
    call("go_back", JsValue::NULL).await
}
