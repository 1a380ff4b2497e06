//! Dishes Screen
//!
//! Form for new dishes above the stored list. Each row can be deleted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, AddDishArgs};
use crate::components::{alert, DeleteConfirmButton, DishRow};
use crate::models::Dish;

#[component]
pub fn DishesScreen() -> impl IntoView {
    let (dishes, set_dishes) = signal(Vec::<Dish>::new());
    let (label, set_label) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (category, set_category) = signal(String::new());

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::load_dishes().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[DISHES] Loaded {} dishes", loaded.len()).into());
                    set_dishes.set(loaded);
                }
                Err(e) => web_sys::console::error_1(&format!("[DISHES] Load failed: {}", e).into()),
            }
        });
    });

    let add_dish = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let label_text = label.get();
        let price_text = price.get();
        let category_text = category.get();

        spawn_local(async move {
            let args = AddDishArgs {
                label: &label_text,
                price: &price_text,
                category: Some(&category_text).filter(|c| !c.trim().is_empty()).map(|c| c.as_str()),
            };
            match commands::add_dish(&args).await {
                Ok(dish) => {
                    set_dishes.update(|list| list.push(dish));
                    set_label.set(String::new());
                    set_price.set(String::new());
                    set_category.set(String::new());
                }
                Err(e) => alert(&e),
            }
        });
    };

    let remove_dish = move |id: String| {
        spawn_local(async move {
            match commands::remove_dish(&id).await {
                Ok(remaining) => set_dishes.set(remaining),
                Err(e) => alert(&e),
            }
        });
    };

    view! {
        <div class="screen dishes-screen">
            <form class="dish-form" on:submit=add_dish>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || label.get()
                    on:input=move |ev| set_label.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Preis"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Art"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
                <button type="submit">"Hinzufügen"</button>
            </form>

            <div class="list">
                <For
                    each=move || dishes.get()
                    key=|dish| dish.id.clone()
                    children=move |dish| {
                        let id = dish.id.clone();
                        let name = dish.label.clone();
                        view! {
                            <DishRow dish=dish>
                                <DeleteConfirmButton
                                    name=name
                                    on_confirm=Callback::new(move |_: ()| remove_dish(id.clone()))
                                />
                            </DishRow>
                        }
                    }
                />
            </div>
        </div>
    }
}
