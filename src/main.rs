#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod pages;
mod theme;

use dioxus::logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        // Logging is best effort; the page still works without it.
        web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
    }

    tracing::info!("Starting folio");

    dioxus::launch(app::App);
}
