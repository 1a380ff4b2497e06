//! Application Context
//!
//! Navigation stack and admin session state, provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::AuthState;
use crate::router::{NavStack, Screen};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    nav: RwSignal<NavStack>,
    /// Last auth state reported by the backend
    pub auth: RwSignal<AuthState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavStack::default()),
            auth: RwSignal::new(AuthState::Anonymous),
        }
    }

    pub fn current(&self) -> Screen {
        self.nav.with(|nav| nav.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.nav.with(|nav| nav.can_go_back())
    }

    pub fn navigate(&self, screen: Screen) {
        web_sys::console::log_1(&format!("[NAV] navigate {}", screen.name()).into());
        self.nav.update(|nav| nav.navigate(screen));
    }

    pub fn replace(&self, screen: Screen) {
        web_sys::console::log_1(&format!("[NAV] replace {}", screen.name()).into());
        self.nav.update(|nav| nav.replace(screen));
    }

    pub fn back(&self) {
        self.nav.update(|nav| {
            nav.back();
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
