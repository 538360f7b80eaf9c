//! Core concepts page: Leptos components, routed app and static rendering

pub mod app;
pub mod components;
pub mod pages;
pub mod render;

/// Hydration entry point for the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
