//! Admin Session Commands
//!
//! Sign-in/out bindings and the auth state event subscription.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{AuthState, AuthUser};
use super::{call, call_unit, js_error, listen, to_args};

/// Event emitted by the backend on every auth state change
const AUTH_STATE_EVENT: &str = "auth-state-changed";

#[derive(Serialize)]
struct SignInArgs<'a> {
    email: &'a str,
    password: &'a str,
}

pub async fn sign_in(email: &str, password: &str) -> Result<AuthUser, String> {
    call("sign_in", to_args(&SignInArgs { email, password })?).await
}

pub async fn sign_out() -> Result<(), String> {
    call_unit("sign_out", JsValue::NULL).await
}

pub async fn auth_state() -> Result<AuthState, String> {
    call("auth_state", JsValue::NULL).await
}

/// Call `on_change` for every auth state change for the life of the app
pub async fn listen_auth_state<F>(on_change: F) -> Result<(), String>
where
    F: Fn(AuthState) + 'static,
{
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let payload = js_sys::Reflect::get(&event, &JsValue::from_str("payload"))
            .unwrap_or(JsValue::NULL);
        match serde_wasm_bindgen::from_value::<AuthState>(payload) {
            Ok(state) => on_change(state),
            Err(e) => web_sys::console::warn_1(&format!("[AUTH] Bad event payload: {}", e).into()),
        }
    });
    listen(AUTH_STATE_EVENT, &handler).await.map_err(js_error)?;
    handler.forget();
    Ok(())
}
