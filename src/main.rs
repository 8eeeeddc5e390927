//! Wedding Site Frontend Entry Point

mod app;
mod commands;
mod components;
mod content;
mod context;
mod filter;
mod markdown;
mod models;
mod pages;
mod registry;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
