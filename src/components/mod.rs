//! UI Components
//!
//! Screens and the Leptos components they are built from.

mod search_screen;
mod manual_code_form;
mod scanner_panel;
mod detail_screen;
mod new_item_form;
mod item_row;
mod status_badge;

pub use search_screen::SearchScreen;
pub use manual_code_form::ManualCodeForm;
pub use scanner_panel::ScannerPanel;
pub use detail_screen::DetailScreen;
pub use new_item_form::NewItemForm;
pub use item_row::ItemRow;
pub use status_badge::StatusBadge;
