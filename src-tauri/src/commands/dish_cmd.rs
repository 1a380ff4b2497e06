//! Tauri Commands for Dishes
//!
//! Exposes the dish list to the dish screen and the dish picker.

use tauri::State;
use mensa_core::{CollectionRepository, Dish, DishDraft, RecordId};
use crate::AppState;
use super::require_admin;

/// Reload dishes from the device store (screen mount)
#[tauri::command]
pub async fn load_dishes(state: State<'_, AppState>) -> Result<Vec<Dish>, String> {
    let mut repo = state.dish_repo.lock().await;
    repo.load().await;
    Ok(repo.list().to_vec())
}

/// Create a dish from the admin form
#[tauri::command]
pub async fn add_dish(
    state: State<'_, AppState>,
    label: String,
    price: String,
    category: Option<String>,
) -> Result<Dish, String> {
    require_admin(&state)?;
    let mut repo = state.dish_repo.lock().await;
    repo.add(DishDraft::new(label, price, category.unwrap_or_default()))
        .await
        .map_err(|e| e.to_string())
}

/// Delete a dish; unknown ids are ignored
#[tauri::command]
pub async fn remove_dish(state: State<'_, AppState>, id: String) -> Result<Vec<Dish>, String> {
    require_admin(&state)?;
    let mut repo = state.dish_repo.lock().await;
    repo.remove(&RecordId::new(id))
        .await
        .map_err(|e| e.to_string())?;
    Ok(repo.list().to_vec())
}
