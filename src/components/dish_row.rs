//! Dish Row Component
//!
//! One dish in a list: name, price and category, plus optional trailing
//! controls.

use leptos::prelude::*;

use crate::models::Dish;

#[component]
pub fn DishRow(dish: Dish, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="list-item">
            <div class="list-item-body">
                <p class="list-item-line">"Name: " {dish.label}</p>
                <p class="list-item-line">"Preis: " {dish.price}</p>
                <p class="list-item-line">"Art: " {dish.category}</p>
            </div>
            {children.map(|c| c())}
        </div>
    }
}
