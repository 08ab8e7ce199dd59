//! Scan Session Commands
//!
//! Frontend bindings for scan sessions and the backend permission gate.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{PermissionView, ReportOutcome};
use super::call;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionArgs {
    session_id: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportArgs<'a> {
    session_id: u64,
    value: &'a str,
}

#[derive(Serialize)]
struct PermissionArgs<'a> {
    permission: &'a str,
    requested: bool,
}

/// Open a scan session, returns its id
pub async fn begin_scan() -> Result<u64, String> {
    call("begin_scan", JsValue::NULL).await
}

pub async fn report_scan(session_id: u64, value: &str) -> Result<ReportOutcome, String> {
    let js_args = serde_wasm_bindgen::to_value(&ReportArgs { session_id, value }).map_err(|e| e.to_string())?;
    call("report_scan", js_args).await
}

pub async fn end_scan(session_id: u64) -> Result<bool, String> {
    let js_args = serde_wasm_bindgen::to_value(&SessionArgs { session_id }).map_err(|e| e.to_string())?;
    call("end_scan", js_args).await
}

pub async fn camera_permission() -> Result<PermissionView, String> {
    call("camera_permission", JsValue::NULL).await
}

pub async fn record_camera_permission(permission: &str, requested: bool) -> Result<PermissionView, String> {
    let js_args = serde_wasm_bindgen::to_value(&PermissionArgs { permission, requested }).map_err(|e| e.to_string())?;
    call("record_camera_permission", js_args).await
}
