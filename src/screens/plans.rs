//! Plans Screen
//!
//! Stored plans joined with the current dishes. Plans whose dish was deleted
//! keep their label and are marked.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::PlanRow;
use crate::router::Screen;

#[component]
pub fn PlansScreen() -> impl IntoView {
    let ctx = use_app_context();
    let (rows, set_rows) = signal(Vec::<PlanRow>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::load_plan_rows().await {
                Ok(loaded) => set_rows.set(loaded),
                Err(e) => web_sys::console::error_1(&format!("[PLANS] Load failed: {}", e).into()),
            }
        });
    });

    view! {
        <div class="screen plans-screen">
            <div class="list">
                <For
                    each=move || rows.get().into_iter().enumerate()
                    key=|(i, row)| (*i, row.plan_id.clone())
                    children=move |(_, row)| {
                        let orphaned = row.is_orphaned();
                        view! {
                            <div class="list-item" class:orphaned=orphaned>
                                <div class="list-item-body">
                                    <p class="list-item-line">{row.label}</p>
                                    {row.price.map(|p| view! { <p class="list-item-line">"Preis: " {p}</p> })}
                                    {row.category.map(|c| view! { <p class="list-item-line">"Art: " {c}</p> })}
                                    <Show when=move || orphaned>
                                        <p class="list-item-note">"Gericht gelöscht"</p>
                                    </Show>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <button class="nav-btn" on:click=move |_| ctx.navigate(Screen::NewPlan)>
                "Hinzufügen"
            </button>
        </div>
    }
}
