//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod auth;
mod calendar;
mod dish;
mod plan;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use auth::*;
pub use calendar::*;
pub use dish::*;
pub use plan::*;

/// Rejected invokes carry the backend's error string
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn to_args<T: Serialize>(args: &T) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

/// Invoke `cmd` and decode its result
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Invoke a command returning `()`
async fn call_unit(cmd: &str, args: JsValue) -> Result<(), String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    // Result is () on success
    if result.is_undefined() || result.is_null() {
        Ok(())
    } else {
        serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
    }
}
