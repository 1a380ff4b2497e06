//! Screen Header Component
//!
//! Title of the current screen with a back button when the stack allows it.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="screen-header">
            <Show when=move || ctx.can_go_back()>
                <button class="header-back" title="Zurück" on:click=move |_| ctx.back()>
                    "‹"
                </button>
            </Show>
            <span class="header-title">{move || ctx.current().title()}</span>
        </header>
    }
}
