//! Regondor Frontend Entry Point

mod models;
mod config;
mod logger;
mod api;
mod cache;
mod store;
mod theme;
mod session;
mod classifier;
mod context;
mod mutations;
mod queries;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
