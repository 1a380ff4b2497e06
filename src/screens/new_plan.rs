use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Screen;

const WEEKDAYS: [&str; 5] = ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag"];

#[component]
pub fn NewPlanScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="screen new-plan-screen">
            {WEEKDAYS.iter().map(|day| view! {
                <div class="weekday-slot">
                    <span class="weekday">{*day}</span>
                    <button class="add-slot-btn" on:click=move |_| ctx.navigate(Screen::ChooseDish)>
                        "+"
                    </button>
                </div>
            }).collect_view()}
            <button class="nav-btn" on:click=move |_| ctx.navigate(Screen::Plans)>
                "Hinzufügen"
            </button>
        </div>
    }
}
