//! Tauri Commands for Meal Plans

use tauri::State;
use mensa_core::{resolve_plans, CollectionRepository, DomainError, Plan, PlanRow, RecordId};
use crate::AppState;
use super::require_admin;

/// Reload plans from the device store
#[tauri::command]
pub async fn load_plans(state: State<'_, AppState>) -> Result<Vec<Plan>, String> {
    let mut repo = state.plan_repo.lock().await;
    repo.load().await;
    Ok(repo.list().to_vec())
}

/// Reload plans and dishes and join them for the plan list
#[tauri::command]
pub async fn load_plan_rows(state: State<'_, AppState>) -> Result<Vec<PlanRow>, String> {
    let mut dishes = state.dish_repo.lock().await;
    let mut plans = state.plan_repo.lock().await;
    dishes.load().await;
    plans.load().await;
    Ok(resolve_plans(plans.list(), dishes.list()))
}

/// Add a plan entry for the dish picked on the picker screen
#[tauri::command]
pub async fn add_plan(state: State<'_, AppState>, dish_id: String) -> Result<Plan, String> {
    require_admin(&state)?;
    let dish_id = RecordId::new(dish_id);

    let mut dishes = state.dish_repo.lock().await;
    if dishes.find_by_id(&dish_id).is_none() {
        dishes.load().await;
    }
    let dish = dishes
        .find_by_id(&dish_id)
        .cloned()
        .ok_or_else(|| DomainError::NotFound(format!("dish {}", dish_id)).to_string())?;

    let mut plans = state.plan_repo.lock().await;
    plans.add(&dish).await.map_err(|e| e.to_string())
}
