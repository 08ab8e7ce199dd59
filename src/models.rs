//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Basket status (matches backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BasketStatus {
    #[default]
    Empty,
    Full,
    InUse,
}

impl BasketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BasketStatus::Empty => "Empty",
            BasketStatus::Full => "Full",
            BasketStatus::InUse => "In use",
        }
    }

    /// Empty reads as go, full as stop, in-use as caution
    pub fn color(&self) -> &'static str {
        match self {
            BasketStatus::Empty => "#4CAF50",
            BasketStatus::Full => "#F44336",
            BasketStatus::InUse => "#FF9800",
        }
    }
}

/// Basket data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    pub code: String,
    pub status: BasketStatus,
    pub items: Vec<String>,
}

/// Active screen (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Searching,
    Viewing { code: String },
}

/// Snapshot returned by every navigation/basket command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScreenView {
    pub screen: Screen,
    pub basket: Option<Basket>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraPermission {
    #[default]
    Unknown,
    Granted,
    Denied,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PermissionView {
    pub state: CameraPermission,
    pub should_request: bool,
    pub scanning_enabled: bool,
}

/// Backend verdict on a decoded value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ReportOutcome {
    Accepted,
    Ignored(String),
}
