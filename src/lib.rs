//! Velix - SaaS landing page
//!
//! A marketing landing page whose hero, feature and pricing sections enter the
//! viewport on a deterministic, staggered animation schedule, built with Leptos
//! and WebAssembly.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
