//! # client
//!
//! Leptos + WASM frontend for the store rating service: signup and login
//! forms, role-gated dashboards for admins, store owners and normal users,
//! and rating submission against the external REST API.
//!
//! The crate is compiled twice: with `ssr` into the host server for the
//! first render, and with `hydrate` into the WASM bundle that takes over in
//! the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server-rendered
/// document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating, api at {}", net::api::api_base_url());
    leptos::mount::hydrate_body(app::App);
}
