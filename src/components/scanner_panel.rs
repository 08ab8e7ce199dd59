//! Scanner Panel Component
//!
//! Resolves camera permission, then runs one scan session at a time through
//! the barcode-scanner plugin. The first decoded code goes to the backend,
//! which navigates on its own and announces the result with an event.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::{CameraPermission, PermissionView, ReportOutcome, Screen};
use crate::store::{store_set_permission, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ScanPhase {
    /// Permission not known yet
    Resolving,
    Idle,
    Scanning(u64),
}

/// Check the plugin, asking the user at most once per app session.
async fn resolve_permission() -> Result<PermissionView, String> {
    let current = commands::camera_permission().await?;
    if current.scanning_enabled {
        return Ok(current);
    }

    let checked = match commands::check_camera_permission().await {
        Ok(state) => commands::record_camera_permission(&state, false).await?,
        Err(e) => {
            log::info!("[SCAN] Scanner plugin unavailable: {}", e);
            return commands::record_camera_permission("unavailable", false).await;
        }
    };
    if !checked.should_request {
        return Ok(checked);
    }

    let state = commands::request_camera_permission()
        .await
        .unwrap_or_else(|_| "denied".to_string());
    commands::record_camera_permission(&state, true).await
}

#[component]
pub fn ScannerPanel() -> impl IntoView {
    let store = use_app_store();
    let (phase, set_phase) = signal(ScanPhase::Resolving);

    let start = move || {
        if matches!(phase.get_untracked(), ScanPhase::Scanning(_)) { return; }

        spawn_local(async move {
            let session_id = match commands::begin_scan().await {
                Ok(id) => id,
                Err(e) => {
                    log::warn!("[SCAN] Could not start: {}", e);
                    set_phase.set(ScanPhase::Idle);
                    return;
                }
            };
            set_phase.set(ScanPhase::Scanning(session_id));

            // Each plugin scan resolves once; blank decodes go back to the camera
            loop {
                let scanned = match commands::scan_qr_code().await {
                    Ok(scanned) => scanned,
                    Err(e) => {
                        log::info!("[SCAN] Session {} stopped: {}", session_id, e);
                        let _ = commands::end_scan(session_id).await;
                        break;
                    }
                };

                match commands::report_scan(session_id, &scanned.content).await {
                    Ok(ReportOutcome::Accepted) => {
                        log::info!("[SCAN] Session {} decoded {} code", session_id, scanned.format);
                        break;
                    }
                    Ok(ReportOutcome::Ignored(reason)) if reason == "blank" => {
                        if phase.try_get_untracked() != Some(ScanPhase::Scanning(session_id)) {
                            break;
                        }
                        log::debug!("[SCAN] Session {} blank decode, scanning again", session_id);
                    }
                    Ok(ReportOutcome::Ignored(reason)) => {
                        log::info!("[SCAN] Session {} value ignored: {}", session_id, reason);
                        let _ = commands::end_scan(session_id).await;
                        break;
                    }
                    Err(e) => {
                        log::error!("[SCAN] report_scan failed: {}", e);
                        let _ = commands::end_scan(session_id).await;
                        break;
                    }
                }
            }

            // The panel is gone if the scan opened a basket
            if phase.try_get_untracked() == Some(ScanPhase::Scanning(session_id)) {
                let _ = set_phase.try_set(ScanPhase::Idle);
            }
        });
    };

    // A scan that opened nothing leaves this screen up: resume scanning.
    // The plugin call behind any announced result has already returned.
    Effect::new(move |seen: Option<u64>| {
        let results = store.scan_results().get();
        if seen.is_some_and(|seen| seen != results) {
            let enabled = store
                .permission()
                .get_untracked()
                .is_some_and(|p| p.scanning_enabled);
            if enabled && store.screen().get_untracked() == Screen::Searching {
                set_phase.set(ScanPhase::Idle);
                start();
            }
        }
        results
    });

    // Resolve permission on mount; scan right away when allowed
    Effect::new(move |_| {
        spawn_local(async move {
            match resolve_permission().await {
                Ok(view) => {
                    store_set_permission(&store, view);
                    if view.scanning_enabled {
                        start();
                    } else {
                        set_phase.set(ScanPhase::Idle);
                    }
                }
                Err(e) => {
                    log::error!("[SCAN] Permission check failed: {}", e);
                    set_phase.set(ScanPhase::Idle);
                }
            }
        });
    });

    // Leaving the screen ends the session
    on_cleanup(move || {
        if let Some(ScanPhase::Scanning(session_id)) = phase.try_get_untracked() {
            spawn_local(async move {
                let _ = commands::cancel_scan().await;
                let _ = commands::end_scan(session_id).await;
            });
        }
    });

    view! {
        <div class=move || if matches!(phase.get(), ScanPhase::Scanning(_)) { "scanner-panel scanning" } else { "scanner-panel" }>
            {move || match store.permission().get().map(|p| p.state) {
                None => view! { <p class="scanner-hint">"Checking camera..."</p> }.into_any(),
                Some(CameraPermission::Granted) => match phase.get() {
                    ScanPhase::Scanning(_) => view! {
                        <p class="scanner-hint">"Point the camera at the basket's code."</p>
                    }.into_any(),
                    _ => view! {
                        <button class="scan-btn" on:click=move |_| start()>"Scan QR code"</button>
                    }.into_any(),
                },
                Some(CameraPermission::Unavailable) => view! {
                    <p class="scanner-hint">"Camera scanning is not available on this device."</p>
                }.into_any(),
                Some(_) => view! {
                    <p class="scanner-hint">"Please grant camera permission."</p>
                }.into_any(),
            }}
        </div>
    }
}
