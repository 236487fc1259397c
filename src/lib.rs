//! # booking-site
//!
//! Leptos + WASM front end for a spa marketing/booking site. Replaces a
//! hand-wired DOM script with per-widget state machines and components:
//! navigation and scroll affordances, an animated stats band, a testimonial
//! carousel, an FAQ accordion, a simulated chat widget, a month-grid date
//! picker, and a demo booking form.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point; hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
