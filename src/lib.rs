//! # wasatext-client
//!
//! Leptos + WASM frontend for the WASAText chat application.
//!
//! This crate contains pages, components, the route table with its
//! authentication guard, the session context backing token storage, and
//! the HTTP client wrapper that injects the bearer token and handles
//! authentication failures.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;

/// Hydration entry point invoked by the generated WASM bindings.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
