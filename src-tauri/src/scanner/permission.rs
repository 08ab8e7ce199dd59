//! Camera Permission Gate
//!
//! Camera access is asked for at most once per app session. A denial is a
//! steady state: scanning stays off and the UI shows guidance text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraPermission {
    /// Not asked yet, or the OS wants to prompt
    #[default]
    Unknown,
    Granted,
    Denied,
    /// No camera scanner on this platform
    Unavailable,
}

impl CameraPermission {
    /// Map a barcode-scanner plugin permission state
    pub fn from_plugin_state(state: &str) -> Self {
        match state {
            "granted" => CameraPermission::Granted,
            "denied" => CameraPermission::Denied,
            "prompt" | "prompt-with-rationale" => CameraPermission::Unknown,
            _ => CameraPermission::Unavailable,
        }
    }
}

/// Snapshot for the scan panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionView {
    pub state: CameraPermission,
    pub should_request: bool,
    pub scanning_enabled: bool,
}

#[derive(Debug, Default)]
pub struct PermissionGate {
    state: CameraPermission,
    requested: bool,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the user has not granted access and has not been asked yet
    pub fn should_request(&self) -> bool {
        !self.requested
            && matches!(self.state, CameraPermission::Unknown | CameraPermission::Denied)
    }

    pub fn scanning_enabled(&self) -> bool {
        self.state == CameraPermission::Granted
    }

    /// Record a permission state. `requested` marks a result coming from
    /// an actual request to the user rather than a silent check.
    pub fn record(&mut self, state: CameraPermission, requested: bool) {
        if state != self.state {
            log::info!("Camera permission {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.requested |= requested;
    }

    pub fn view(&self) -> PermissionView {
        PermissionView {
            state: self.state,
            should_request: self.should_request(),
            scanning_enabled: self.scanning_enabled(),
        }
    }
}
