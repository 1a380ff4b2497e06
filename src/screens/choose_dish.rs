//! Choose Dish Screen
//!
//! Lists the stored dishes. Tapping one appends a plan for it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{alert, DishRow};
use crate::models::Dish;

#[component]
pub fn ChooseDishScreen() -> impl IntoView {
    let (dishes, set_dishes) = signal(Vec::<Dish>::new());
    let (added, set_added) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::load_dishes().await {
                Ok(loaded) => set_dishes.set(loaded),
                Err(e) => web_sys::console::error_1(&format!("[CHOOSE] Load failed: {}", e).into()),
            }
        });
    });

    let choose = move |dish: Dish| {
        spawn_local(async move {
            match commands::add_plan(&dish.id).await {
                Ok(plan) => set_added.set(Some(plan.label)),
                Err(e) => alert(&e),
            }
        });
    };

    view! {
        <div class="screen choose-dish-screen">
            <Show when=move || added.get().is_some()>
                <p class="confirmation">
                    {move || format!("{} wurde zum Plan hinzugefügt", added.get().unwrap_or_default())}
                </p>
            </Show>
            <div class="list">
                <For
                    each=move || dishes.get()
                    key=|dish| dish.id.clone()
                    children=move |dish| {
                        let picked = dish.clone();
                        view! {
                            <div class="selectable" on:click=move |_| choose(picked.clone())>
                                <DishRow dish=dish />
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
