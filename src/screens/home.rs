use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Screen;

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="screen home-screen">
            <h1 class="app-name">"MensaApp"</h1>
            <button class="nav-btn" on:click=move |_| ctx.navigate(Screen::Calendar)>
                "Kalender"
            </button>
            <button class="nav-btn" on:click=move |_| ctx.navigate(Screen::Login)>
                "Login"
            </button>
        </div>
    }
}
