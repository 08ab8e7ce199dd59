//! Navigation Layer
//!
//! Screen state machine and the session that binds it to the basket table.

mod navigator;
mod session;

pub use navigator::{Navigator, Screen};
pub use session::{BasketSession, ScreenView};
