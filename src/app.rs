//! MensaApp Frontend App
//!
//! Header plus the screen on top of the navigation stack.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::Header;
use crate::context::AppContext;
use crate::router::Screen;
use crate::screens::{
    AdminScreen, CalendarScreen, ChooseDishScreen, DishesScreen, HomeScreen, LoginScreen,
    NewPlanScreen, PlansScreen,
};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Initial auth state, then follow backend changes
    spawn_local(async move {
        match commands::auth_state().await {
            Ok(state) => ctx.auth.set(state),
            Err(e) => web_sys::console::error_1(&format!("[AUTH] {}", e).into()),
        }
        if let Err(e) = commands::listen_auth_state(move |state| ctx.auth.set(state)).await {
            web_sys::console::error_1(&format!("[AUTH] Listen failed: {}", e).into());
        }
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match ctx.current() {
                    Screen::Home => view! { <HomeScreen /> }.into_any(),
                    Screen::Login => view! { <LoginScreen /> }.into_any(),
                    Screen::Admin => view! { <AdminScreen /> }.into_any(),
                    Screen::Calendar => view! { <CalendarScreen /> }.into_any(),
                    Screen::Dishes => view! { <DishesScreen /> }.into_any(),
                    Screen::Plans => view! { <PlansScreen /> }.into_any(),
                    Screen::NewPlan => view! { <NewPlanScreen /> }.into_any(),
                    Screen::ChooseDish => view! { <ChooseDishScreen /> }.into_any(),
                }}
            </main>
        </div>
    }
}
