//! # plantlog
//!
//! Leptos + WASM frontend for the plant-photo tracking application.
//! Client-side routing with an auth/admin navigation guard, a session store
//! mirrored to localStorage, and a single JSON login call to the backend.
//!
//! Browser-only behavior (fetch, storage, timers, the WASM entry point) is
//! gated behind the `hydrate` feature; with no features enabled the crate
//! builds natively and the guard/session logic is testable off-browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: install the panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
