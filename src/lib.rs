//! # ironforged-gate
//!
//! Leptos + WASM access gate and Discord-identity session for the Iron Forged
//! clan site and its tile-events app.
//!
//! The crate decides two things on every page load: whether the visitor is
//! signed in (the soft [`state::session::Session`] used for feature flags) and,
//! on staging deployments, whether they may see the page at all (the hard
//! [`state::gate::GateState`] machine). Browser globals sit behind the
//! [`util::environment::EnvironmentReader`] and [`util::token_store::TokenStore`]
//! seams so both flows run without a browser in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point for the clan site.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_site() {
    init_browser_logging();
    leptos::mount::mount_to_body(app::App);
}

/// WASM entry point for the tile-events app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_events() {
    init_browser_logging();
    leptos::mount::mount_to_body(app::EventsApp);
}

#[cfg(feature = "csr")]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info });
}
