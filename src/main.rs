//! Storefront Frontend Entry Point

mod models;
mod context;
mod store;
mod storage;
mod components;
mod app;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init_logger();
    mount_to_body(App);
}
