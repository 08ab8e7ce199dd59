//! Runtime Configuration
//!
//! Resolved once during setup from the Tauri path resolver and the
//! environment.

use std::path::PathBuf;

use rolling_logger::{LevelFilter, LoggerConfig};

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "BASKET_SCAN_LOG";

const APP_NAME: &str = "BasketScan";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    pub app_name: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn new(log_dir: PathBuf, level: Option<&str>) -> Self {
        Self {
            log_dir,
            app_name: APP_NAME.to_string(),
            log_level: parse_level(level),
        }
    }

    /// Resolve from the app handle and `BASKET_SCAN_LOG`
    pub fn resolve(app_handle: &tauri::AppHandle) -> Result<Self, String> {
        use tauri::Manager;

        let log_dir = app_handle
            .path()
            .app_log_dir()
            .map_err(|e| format!("Failed to resolve log dir: {}", e))?;
        let level = std::env::var(LOG_LEVEL_ENV).ok();
        Ok(Self::new(log_dir, level.as_deref()))
    }

    pub fn logger(&self) -> LoggerConfig {
        LoggerConfig::new(self.log_dir.clone(), &self.app_name).with_level(self.log_level)
    }
}

/// `error|warn|info|debug|trace`, any casing. Anything else is `info`.
fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.map(|l| l.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => LevelFilter::ERROR,
        Some("warn") => LevelFilter::WARN,
        Some("debug") => LevelFilter::DEBUG,
        Some("trace") => LevelFilter::TRACE,
        _ => LevelFilter::INFO,
    }
}
