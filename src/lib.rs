pub mod catalog;
pub mod common;
#[cfg(feature = "ssr")]
pub mod config;
pub mod format;
pub mod frontend;
pub mod i18n;
pub mod models;
pub mod routing;
pub mod session;

/// WASM hydration entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(frontend::App);
}
