//! MyFood Storefront Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod listing;
mod logger;
mod models;
mod session;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::app_config();
    logger::init(config.log_level);
    log::info!("Starting storefront against {}", config.api_base_url);

    mount_to_body(App);
}
