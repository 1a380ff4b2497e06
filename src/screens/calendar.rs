//! Calendar Screen
//!
//! Current ISO week, Monday to Sunday, with paging to neighbouring weeks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::alert;
use crate::models::WeekView;

#[component]
pub fn CalendarScreen() -> impl IntoView {
    let (offset, set_offset) = signal(0i64);
    let (week, set_week) = signal::<Option<WeekView>>(None);

    Effect::new(move |_| {
        let offset = offset.get();
        spawn_local(async move {
            match commands::calendar_week(offset).await {
                Ok(loaded) => set_week.set(Some(loaded)),
                Err(e) => alert(&e),
            }
        });
    });

    view! {
        <div class="screen calendar-screen">
            <div class="week-nav">
                <button on:click=move |_| set_offset.update(|o| *o -= 1)>"‹"</button>
                <span class="week-label">
                    {move || week.get().map(|w| w.label).unwrap_or_default()}
                </span>
                <button on:click=move |_| set_offset.update(|o| *o += 1)>"›"</button>
            </div>
            <Show when=move || offset.get() != 0>
                <button class="link-btn" on:click=move |_| set_offset.set(0)>"Heute"</button>
            </Show>
            <ul class="week-days">
                <For
                    each=move || week.get().map(|w| w.days).unwrap_or_default()
                    key=|day| day.date.clone()
                    children=move |day| {
                        view! {
                            <li class="week-day" class:today=day.today>
                                <span class="weekday">{day.weekday}</span>
                                <span class="date">{day.date}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
