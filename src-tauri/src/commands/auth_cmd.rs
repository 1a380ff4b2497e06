//! Admin Session Commands

use tauri::State;
use mensa_core::{AuthState, AuthUser};
use crate::AppState;

#[tauri::command]
pub async fn sign_in(
    state: State<'_, AppState>,
    email: String,
    password: String,
) -> Result<AuthUser, String> {
    state.auth.sign_in(&email, &password).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<(), String> {
    state.auth.sign_out().await.map_err(|e| e.to_string())
}

/// Current session state, read by the login screen on mount
#[tauri::command]
pub fn auth_state(state: State<'_, AppState>) -> AuthState {
    state.auth.state()
}
