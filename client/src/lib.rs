//! Leptos front-end for the service marketplace.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built twice: as a WASM bundle (`hydrate`) that owns the browser session,
//! and as a library (`ssr`) the server uses to render [`app::shell`]. All
//! session rules live in the `session` crate; this crate bridges them into
//! signals, storage and HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
