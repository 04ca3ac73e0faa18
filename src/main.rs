//! Dropped Items Frontend Entry Point

mod app;
mod components;
mod config;
mod logging;
mod models;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::default();
    let _ = logging::init(config.log_level);
    log::debug!("[APP] mounting board with {} boxes", config.boxes.len());

    mount_to_body(move || view! { <App config=config /> });
}
