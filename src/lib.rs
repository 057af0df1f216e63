//! # parlay
//!
//! Leptos + WASM web client for the Parlay casino platform: public game
//! lobby, staff sign-in, and the admin console (dashboard and support desk).
//!
//! ARCHITECTURE
//! ============
//! `pages` own route-scoped orchestration, `components` render reusable
//! chrome, `state` holds context-provided signals, `net` talks to the hosted
//! platform API, and `util` keeps decision and formatting logic pure. Admin
//! routes are gated by `components::admin_guard`, whose decision procedure
//! lives in `util::access`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
