//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod auth_cmd;
mod calendar_cmd;
mod dish_cmd;
mod plan_cmd;

pub use auth_cmd::*;
pub use calendar_cmd::*;
pub use dish_cmd::*;
pub use plan_cmd::*;

use crate::AppState;

/// Mutations are reserved for a signed-in administrator
pub(crate) fn require_admin(state: &AppState) -> Result<(), String> {
    match state.auth.state().user() {
        Some(_) => Ok(()),
        None => Err("Please sign in as an administrator.".to_string()),
    }
}
