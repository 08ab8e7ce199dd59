//! Tauri Commands for Camera Scanning
//!
//! The frontend drives the barcode-scanner plugin and forwards decoded
//! values here. Each scan session hands its first value to the navigator
//! from a background task, then announces the new screen with an event.

use tauri::{AppHandle, Emitter, Manager, State};
use tokio::sync::Mutex;

use crate::domain::{CodeSource, DomainResult};
use crate::navigation::{BasketSession, ScreenView};
use crate::scanner::{CameraPermission, PermissionView, ReportOutcome, ScanRegistry, ScanSubscription};
use crate::AppState;

/// Emitted with a `ScreenView` payload when a scan changes the screen
pub const NAVIGATION_EVENT: &str = "navigation-changed";

/// Open a scan session. Requires camera permission.
#[tauri::command]
pub async fn begin_scan(app: AppHandle, state: State<'_, AppState>) -> Result<u64, String> {
    if !state.camera.lock().await.scanning_enabled() {
        return Err("Camera permission has not been granted".to_string());
    }

    let (session_id, subscription) = state.scans.lock().await.begin();
    log::info!("Scan session {} started", session_id);

    tauri::async_runtime::spawn(async move {
        let state = app.state::<AppState>();
        let Some(result) = consume_scan(session_id, subscription, &state.scans, &state.session).await
        else {
            return;
        };

        match result {
            Ok(view) => {
                if let Err(e) = app.emit(NAVIGATION_EVENT, &view) {
                    log::error!("Failed to emit {}: {}", NAVIGATION_EVENT, e);
                }
            }
            Err(e) => log::warn!("Scan session {} result dropped: {}", session_id, e),
        }
    });

    Ok(session_id)
}

/// Wait for the code of scan session `session_id`, close the session and
/// submit the code to the navigator as a scanned entry.
///
/// `None` when the session ended without delivering a code.
pub(crate) async fn consume_scan(
    session_id: u64,
    mut subscription: ScanSubscription,
    scans: &Mutex<ScanRegistry>,
    session: &Mutex<BasketSession>,
) -> Option<DomainResult<ScreenView>> {
    let Some(code) = subscription.next().await else {
        log::debug!("Scan session {} closed without a code", session_id);
        return None;
    };

    scans.lock().await.finish(session_id);
    Some(session.lock().await.submit(&code, CodeSource::Scan))
}

/// Forward a decoded value to scan session `session_id`
#[tauri::command]
pub async fn report_scan(
    state: State<'_, AppState>,
    session_id: u64,
    value: String,
) -> Result<ReportOutcome, String> {
    let outcome = state.scans.lock().await.report(session_id, &value);
    log::debug!("Scan session {} report: {:?}", session_id, outcome);
    Ok(outcome)
}

/// Stop listening to scan session `session_id`
#[tauri::command]
pub async fn end_scan(state: State<'_, AppState>, session_id: u64) -> Result<bool, String> {
    Ok(state.scans.lock().await.end(session_id))
}

/// Current camera permission view
#[tauri::command]
pub async fn camera_permission(state: State<'_, AppState>) -> Result<PermissionView, String> {
    Ok(state.camera.lock().await.view())
}

/// Record a plugin permission state (`granted`, `denied`, `prompt`, ...).
/// `requested` is true when the state came from asking the user.
#[tauri::command]
pub async fn record_camera_permission(
    state: State<'_, AppState>,
    permission: String,
    requested: bool,
) -> Result<PermissionView, String> {
    let mut camera = state.camera.lock().await;
    camera.record(CameraPermission::from_plugin_state(&permission), requested);
    Ok(camera.view())
}
