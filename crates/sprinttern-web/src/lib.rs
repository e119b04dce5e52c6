//! Sprinttern Web Frontend
//!
//! Leptos-based WASM landing page with the pilot-access waitlist form.

mod api;
mod app;
mod components;
mod content;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
