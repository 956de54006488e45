//! Rob3 Mashwy storefront entry point

mod app;
mod components;
mod logging;
mod models;
mod platform;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = logging::setup_logging() {
        web_sys::console::warn_1(&format!("Warning: Failed to setup logging: {e}").into());
    }

    mount_to_body(App);
}
