//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod delete_confirm_button;
mod dish_row;

pub use header::Header;
pub use delete_confirm_button::DeleteConfirmButton;
pub use dish_row::DishRow;

/// Blocking alert, as the screens use for errors
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
