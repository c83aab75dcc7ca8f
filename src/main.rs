#![allow(warnings)]
//! Gestor de Proyectos Frontend Entry Point

mod models;
mod status;
mod list_view;
mod typewriter;
mod form;
mod chart;
mod summary_format;
mod config;
mod api;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let cfg = config::config();
    if rolling_logger::init(cfg.log_level).is_ok() {
        log::info!("[APP] Starting, backend at {}", cfg.api_url);
    }

    mount_to_body(App);
}
