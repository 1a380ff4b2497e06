//! Dish Commands
//!
//! Frontend bindings for dish-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::Dish;
use super::{call, to_args};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct AddDishArgs<'a> {
    pub label: &'a str,
    pub price: &'a str,
    pub category: Option<&'a str>,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn load_dishes() -> Result<Vec<Dish>, String> {
    call("load_dishes", JsValue::NULL).await
}

pub async fn add_dish(args: &AddDishArgs<'_>) -> Result<Dish, String> {
    call("add_dish", to_args(args)?).await
}

/// Returns the remaining dishes
pub async fn remove_dish(id: &str) -> Result<Vec<Dish>, String> {
    call("remove_dish", to_args(&IdArgs { id })?).await
}
