//! # client
//!
//! Leptos + WASM storefront for the Forkline food-ordering application.
//!
//! The crate centers on the session/auth boundary: a localStorage-backed
//! token store, a typed API client, the auth service (login/signup/logout/
//! verify), a session state machine provided via context, and a two-layer
//! route guard. Pages are the minimal set needed to exercise that boundary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
