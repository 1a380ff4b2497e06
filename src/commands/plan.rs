//! Plan Commands
//!
//! Frontend bindings for meal plan commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{Plan, PlanRow};
use super::{call, to_args};

#[derive(Serialize)]
struct AddPlanArgs<'a> {
    #[serde(rename = "dishId")]
    dish_id: &'a str,
}

pub async fn load_plan_rows() -> Result<Vec<PlanRow>, String> {
    call("load_plan_rows", JsValue::NULL).await
}

pub async fn add_plan(dish_id: &str) -> Result<Plan, String> {
    call("add_plan", to_args(&AddPlanArgs { dish_id })?).await
}
