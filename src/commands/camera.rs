//! Barcode Scanner Plugin Commands
//!
//! Wrappers for the mobile barcode-scanner plugin. On desktop the plugin is
//! not registered and every call comes back as `Err`.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use super::call;

#[derive(Deserialize)]
struct PluginPermissions {
    camera: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanOptions {
    windowed: bool,
    formats: Vec<&'static str>,
    camera_direction: &'static str,
}

/// A decoded barcode
#[derive(Debug, Clone, Deserialize)]
pub struct Scanned {
    pub content: String,
    pub format: String,
}

/// Plugin permission state: `granted`, `denied`, `prompt`, ...
pub async fn check_camera_permission() -> Result<String, String> {
    let perms: PluginPermissions = call("plugin:barcode-scanner|checkPermissions", JsValue::NULL).await?;
    Ok(perms.camera)
}

/// Ask the user for camera access
pub async fn request_camera_permission() -> Result<String, String> {
    let perms: PluginPermissions = call("plugin:barcode-scanner|requestPermissions", JsValue::NULL).await?;
    Ok(perms.camera)
}

/// Open the back camera behind the webview and wait for the first QR code
pub async fn scan_qr_code() -> Result<Scanned, String> {
    let options = ScanOptions {
        windowed: true,
        formats: vec!["QR_CODE"],
        camera_direction: "back",
    };
    let js_args = serde_wasm_bindgen::to_value(&options).map_err(|e| e.to_string())?;
    call("plugin:barcode-scanner|scan", js_args).await
}

/// Stop a running plugin scan
pub async fn cancel_scan() -> Result<(), String> {
    call("plugin:barcode-scanner|cancel", JsValue::NULL).await
}
