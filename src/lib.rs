//! # prepmentor-client
//!
//! Leptos + WASM browser client for PrepMentor, an interview-preparation
//! app. Users sign in, generate and publish AI question sets, answer
//! practice questions, and review AI feedback and dashboard statistics.
//!
//! ARCHITECTURE
//! ============
//! - `net`: typed wrappers over the backend REST API behind the `Backend` seam.
//! - `state`: auth state and the question store shared through context.
//! - `pages` / `components`: route screens and page chrome.
//! - `routes`: private/public route guards.
//! - `styles`: Tailwind class tables.
//!
//! The crate builds with `hydrate` for the browser bundle and with `ssr` for
//! the `prepmentor-server` host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod styles;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
