//! Portfolio Page Entry Point

mod app;
mod clock;
mod components;
mod config;
mod contact;
mod context;
mod filter;
mod models;
mod store;
mod theme;
mod todo;
mod visits;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("[APP] Starting portfolio page");
    mount_to_body(App);
}
