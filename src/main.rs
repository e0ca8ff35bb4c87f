//! Rio CRM Frontend Entry Point

mod models;
mod config;
mod api;
mod context;
mod lead_list;
mod nav;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
