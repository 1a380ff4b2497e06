use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::alert;
use crate::context::use_app_context;
use crate::models::AuthState;
use crate::router::Screen;

#[component]
pub fn AdminScreen() -> impl IntoView {
    let ctx = use_app_context();

    let sign_out = move |_| {
        spawn_local(async move {
            match commands::sign_out().await {
                Ok(()) => {
                    ctx.auth.set(AuthState::Anonymous);
                    ctx.replace(Screen::Login);
                }
                Err(e) => alert(&e),
            }
        });
    };

    view! {
        <div class="screen admin-screen">
            <p class="admin-user">
                {move || ctx.auth.get().user_email().unwrap_or_default()}
            </p>
            <button class="nav-btn" on:click=move |_| ctx.navigate(Screen::Plans)>
                "Essenspläne"
            </button>
            <button class="nav-btn" on:click=move |_| ctx.navigate(Screen::Calendar)>
                "Kalender"
            </button>
            <button class="nav-btn" on:click=move |_| ctx.navigate(Screen::Dishes)>
                "Gerichte"
            </button>
            <button class="nav-btn secondary" on:click=sign_out>
                "Abmelden"
            </button>
        </div>
    }
}
