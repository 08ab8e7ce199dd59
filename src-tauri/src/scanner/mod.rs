//! Scanner Layer
//!
//! Scan-session plumbing between the camera recognizer and the navigator,
//! plus the camera permission gate. Decoding itself happens in the
//! barcode-scanner plugin.

mod channel;
mod registry;
mod permission;

pub use channel::{IgnoreReason, ReportOutcome, ScanSubscription};
pub use registry::ScanRegistry;
pub use permission::{CameraPermission, PermissionGate, PermissionView};
