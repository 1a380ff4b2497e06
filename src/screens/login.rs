//! Login Screen
//!
//! Admin sign-in form. Moves on to the admin screen as soon as the backend
//! reports an authenticated session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::alert;
use crate::context::use_app_context;
use crate::models::AuthState;
use crate::router::Screen;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    Effect::new(move |_| {
        if ctx.auth.get().is_authenticated() && ctx.current() == Screen::Login {
            ctx.replace(Screen::Admin);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        spawn_local(async move {
            match commands::sign_in(&email, &password).await {
                Ok(user) => {
                    web_sys::console::log_1(&format!("[AUTH] Signed in as {}", user.email).into());
                    set_password.set(String::new());
                }
                Err(e) => alert(&e),
            }
        });
    };

    let busy = move || matches!(ctx.auth.get(), AuthState::Authenticating);

    view! {
        <form class="screen login-screen" on:submit=submit>
            <input
                type="email"
                placeholder="E-Mail"
                autocomplete="username"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Passwort"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=busy>
                {move || if busy() { "Anmelden..." } else { "Login" }}
            </button>
        </form>
    }
}
