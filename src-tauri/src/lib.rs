//! Basket Scan Backend
//!
//! Layered architecture:
//! - domain: Baskets, codes and status rules
//! - repository: The in-memory basket table
//! - navigation: Screen state machine bound to the table
//! - scanner: Scan sessions and the camera permission gate
//! - commands: Tauri command handlers

use tauri::Manager;
use tokio::sync::Mutex;

mod config;
mod domain;
mod repository;
mod navigation;
mod scanner;
mod commands;

use config::AppConfig;
use navigation::BasketSession;
use repository::{BasketRepository, BasketStore};
use scanner::{PermissionGate, ScanRegistry};

/// Application state shared across commands
pub struct AppState {
    /// Basket table plus navigator, locked together per command
    pub session: Mutex<BasketSession>,
    pub scans: Mutex<ScanRegistry>,
    pub camera: Mutex<PermissionGate>,
}

impl AppState {
    pub fn new(store: BasketStore) -> Self {
        Self {
            session: Mutex::new(BasketSession::new(store)),
            scans: Mutex::new(ScanRegistry::new()),
            camera: Mutex::new(PermissionGate::new()),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default();

    #[cfg(mobile)]
    let builder = builder.plugin(tauri_plugin_barcode_scanner::init());

    builder
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let config = AppConfig::resolve(app.handle())?;
            if let Err(e) = rolling_logger::init(config.logger()) {
                eprintln!("Failed to init rolling logger: {}", e);
            }

            let store = BasketStore::seeded();
            let codes: Vec<String> = store.list().iter().map(|b| b.code.to_string()).collect();
            if let Err(e) = rolling_logger::info(&format!("Basket store ready: {}", codes.join(", "))) {
                eprintln!("Failed to log startup: {}", e);
            }
            app.manage(AppState::new(store));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Lookup + navigation
            commands::get_screen,
            commands::submit_code,
            commands::go_back,
            // Basket contents
            commands::add_item,
            commands::remove_item,
            // Camera scanning
            commands::begin_scan,
            commands::report_scan,
            commands::end_scan,
            commands::camera_permission,
            commands::record_camera_permission,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
