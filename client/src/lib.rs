//! # client
//!
//! Leptos + WASM frontend for the DocAi document studio: template
//! marketplace, document builders, the AI writer, and the browser-side
//! session/auth gate.
//!
//! Authentication is deliberately client-only in this prototype: demo
//! credentials are compared in-process and the session lives in
//! `localStorage`. The placeholder HTTP API served by the `server` crate
//! is never consulted by these flows.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
