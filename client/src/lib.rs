//! # client
//!
//! Leptos + WASM frontend for the drawing demo. Two tabs: a hand-rolled
//! freehand tracker with a live velocity readout, and an inking surface
//! that delegates stroke rendering to the browser canvas with one fixed
//! pen. Integrates with the `surface` crate through the host bridge
//! components.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
