#![allow(warnings)]
//! MensaApp Frontend Entry Point

mod models;
mod commands;
mod router;
mod context;
mod components;
mod screens;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
