//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod basket_cmd;
mod scan_cmd;

pub use basket_cmd::*;
pub use scan_cmd::*;
