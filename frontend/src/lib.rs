#![recursion_limit = "512"]
//! Browser entry point: hydrates the server-rendered instructions page so the
//! route map toggle becomes interactive.

use app::components::App;
use leptos::mount::hydrate_body;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // `tracing` events from the components are forwarded to `log` when no
    // subscriber is installed, so this also surfaces route changes.
    #[allow(clippy::expect_used)]
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");

    hydrate_body(App);
}
