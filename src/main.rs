//! User List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod confirm;
mod context;
mod controller;
mod error;
mod form;
mod logger;
mod models;
mod notify;
mod session;
mod store;
mod validation;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logger::init(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
