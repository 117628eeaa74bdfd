//! # client
//!
//! Leptos + WASM frontend for the Cookieflix subscription storefront.
//!
//! This crate contains pages, components, application state, REST types and
//! wrappers. The `ssr` feature renders it inside the Axum host; the `hydrate`
//! feature builds the browser bundle that takes over after first paint.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("cookieflix client {}", config::APP_VERSION);
    leptos::mount::hydrate_body(app::App);
}
